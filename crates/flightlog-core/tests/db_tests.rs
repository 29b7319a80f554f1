use flightlog_core::{Database, NewFlightLog};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_flight(owner_id: &str, callsign: &str) -> NewFlightLog {
    NewFlightLog {
        owner_id: owner_id.to_string(),
        owner_label: "Maverick".to_string(),
        origin: "TPE".to_string(),
        destination: "NRT".to_string(),
        vehicle_type: "B777".to_string(),
        callsign: callsign.to_string(),
        passenger_count: "300".to_string(),
        duration: "3h".to_string(),
        image_url: None,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_insert_and_list_flight() {
    let (_temp_file, mut db) = create_test_db();

    let mut flight = new_flight("1001", "EVA 12");
    flight.image_url = Some("https://img.example/12.png".to_string());
    let record = db.insert_flight(&flight).expect("Failed to insert flight");

    assert!(record.id > 0);
    assert_eq!(record.callsign, "EVA 12");

    let flights = db.list_flights("1001").expect("Failed to list flights");
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0], record);
    assert_eq!(
        flights[0].image_url.as_deref(),
        Some("https://img.example/12.png")
    );
}

#[test]
fn test_list_is_scoped_to_owner() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_flight(&new_flight("1001", "EVA 1")).expect("insert");
    db.insert_flight(&new_flight("2002", "EVA 2")).expect("insert");
    db.insert_flight(&new_flight("1001", "EVA 3")).expect("insert");

    let flights = db.list_flights("1001").expect("list");
    let callsigns: Vec<&str> = flights.iter().map(|f| f.callsign.as_str()).collect();
    assert_eq!(callsigns, ["EVA 1", "EVA 3"]);
    assert!(db.list_flights("3003").expect("list").is_empty());
}

#[test]
fn test_created_at_never_goes_backwards() {
    let (_temp_file, mut db) = create_test_db();

    let records: Vec<_> = (0..20)
        .map(|i| {
            db.insert_flight(&new_flight("1001", &format!("EVA {i}")))
                .expect("insert")
        })
        .collect();

    for pair in records.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
        assert!(pair[0].id < pair[1].id);
    }
}

#[test]
fn test_delete_flight() {
    let (_temp_file, mut db) = create_test_db();

    let record = db.insert_flight(&new_flight("1001", "EVA 1")).expect("insert");

    assert!(db.delete_flight(record.id).expect("delete"));
    assert!(!db.delete_flight(record.id).expect("second delete"));
    assert!(db.list_flights("1001").expect("list").is_empty());
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_flight(&new_flight("1001", "EVA 1")).expect("insert");
    db.delete_flight(first.id).expect("delete");
    let second = db.insert_flight(&new_flight("1001", "EVA 2")).expect("insert");

    assert!(second.id > first.id);
}

#[test]
fn test_records_survive_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    {
        let mut db = Database::new(temp_file.path()).expect("open");
        db.insert_flight(&new_flight("1001", "EVA 1")).expect("insert");
    }

    let db = Database::new(temp_file.path()).expect("reopen");
    let flights = db.list_flights("1001").expect("list");
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].callsign, "EVA 1");
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::open_in_memory().expect("open");
    db.insert_flight(&new_flight("1001", "EVA 1")).expect("insert");
    assert_eq!(db.list_flights("1001").expect("list").len(), 1);
}
