//! Contract tests shared by every store adapter.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::error::FlightLogError;

fn flight(owner_id: &str, origin: &str, destination: &str) -> NewFlightLog {
    NewFlightLog {
        owner_id: owner_id.to_string(),
        owner_label: format!("pilot-{owner_id}"),
        origin: origin.to_string(),
        destination: destination.to_string(),
        vehicle_type: "B777".to_string(),
        callsign: "EVA 88".to_string(),
        passenger_count: "300".to_string(),
        duration: "N/A".to_string(),
        image_url: None,
    }
}

async fn assert_store_contract(store: &dyn RecordStore) {
    let a = store.create(flight("1", "TPE", "NRT")).await.expect("create a");
    let b = store.create(flight("1", "TPE", "HND")).await.expect("create b");
    let other = store.create(flight("2", "KIX", "TPE")).await.expect("create other");

    assert_ne!(a, b);
    assert_ne!(b, other);

    let mut owned = store.list("1").await.expect("list owner 1");
    owned.sort_by_key(|r| r.id);
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|r| r.owner_id == "1"));
    assert!(owned[0].created_at <= owned[1].created_at);
    assert_eq!(owned[1].destination, "HND");

    assert!(store.delete(a).await.expect("delete a"));
    assert!(!store.delete(a).await.expect("delete a twice"));
    assert!(!store.delete(9_999).await.expect("delete unknown"));

    let remaining = store.list("1").await.expect("list after delete");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b);

    assert_eq!(store.list("2").await.expect("list owner 2").len(), 1);
    assert!(store.list("nobody").await.expect("list nobody").is_empty());
}

async fn assert_ids_never_reused(store: &dyn RecordStore) {
    let first = store.create(flight("1", "TPE", "NRT")).await.expect("create");
    assert!(store.delete(first).await.expect("delete"));
    let second = store.create(flight("1", "TPE", "NRT")).await.expect("create again");
    assert!(second > first);
}

#[tokio::test]
async fn test_memory_store_contract() {
    assert_store_contract(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_store_ids_never_reused() {
    assert_ids_never_reused(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(temp_dir.path().join("flights.db"))
        .await
        .expect("Failed to open sqlite store");
    assert_store_contract(&store).await;
}

#[tokio::test]
async fn test_sqlite_store_ids_never_reused() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(temp_dir.path().join("flights.db"))
        .await
        .expect("Failed to open sqlite store");
    assert_ids_never_reused(&store).await;
}

#[tokio::test]
async fn test_sqlite_store_persists_across_instances() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flights.db");

    let id = {
        let store = SqliteStore::open(&path).await.expect("open");
        let mut new_flight = flight("1", "TPE", "NRT");
        new_flight.image_url = Some("https://img.example/1.png".to_string());
        store.create(new_flight).await.expect("create")
    };

    let reopened = SqliteStore::open(&path).await.expect("reopen");
    let records = reopened.list("1").await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(
        records[0].image_url.as_deref(),
        Some("https://img.example/1.png")
    );
}

#[tokio::test]
async fn test_json_store_contract() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(temp_dir.path().join("flights.json"));
    assert_store_contract(&store).await;
}

#[tokio::test]
async fn test_json_store_ids_never_reused() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(temp_dir.path().join("flights.json"));
    assert_ids_never_reused(&store).await;
}

#[tokio::test]
async fn test_json_store_treats_corrupt_file_as_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flights.json");
    fs::write(&path, r#"{"next_id": 4, "records": [{"id": 1, "owner_"#).expect("write");

    let store = JsonFileStore::new(&path);
    assert!(store.list("1").await.expect("list corrupt").is_empty());

    let id = store.create(flight("1", "TPE", "NRT")).await.expect("create");
    assert_eq!(id, 1);
    assert_eq!(store.list("1").await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_json_store_accepts_bare_record_array() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flights.json");
    fs::write(
        &path,
        r#"[{
            "id": 5,
            "owner_id": "1",
            "owner_label": "ace",
            "origin": "TPE",
            "destination": "NRT",
            "vehicle_type": "B777",
            "callsign": "EVA 5",
            "passenger_count": "12",
            "created_at": "2024-05-01T10:00:00Z"
        }]"#,
    )
    .expect("write");

    let store = JsonFileStore::new(&path);
    let records = store.list("1").await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].duration, "N/A");

    let id = store.create(flight("1", "NRT", "TPE")).await.expect("create");
    assert_eq!(id, 6);
}

#[tokio::test]
async fn test_json_store_replaces_file_without_leftovers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flights.json");
    let store = JsonFileStore::new(&path);

    let first = store.create(flight("1", "TPE", "NRT")).await.expect("create");
    let second = store.create(flight("1", "TPE", "HND")).await.expect("create");
    assert!(store.delete(first).await.expect("delete"));

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, [std::ffi::OsString::from("flights.json")]);

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("valid json");
    assert_eq!(document["records"].as_array().map(Vec::len), Some(1));
    assert_eq!(document["records"][0]["id"], second);
    assert_eq!(document["next_id"], second + 1);
}

#[tokio::test]
async fn test_json_store_rejects_create_when_ids_are_exhausted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flights.json");
    fs::write(
        &path,
        format!(
            r#"[{{
            "id": {},
            "owner_id": "1",
            "owner_label": "ace",
            "origin": "TPE",
            "destination": "NRT",
            "vehicle_type": "B777",
            "callsign": "EVA 5",
            "passenger_count": "12",
            "created_at": "2024-05-01T10:00:00Z"
        }}]"#,
            u64::MAX
        ),
    )
    .expect("write");

    let store = JsonFileStore::new(&path);
    let err = store.create(flight("1", "NRT", "TPE")).await.unwrap_err();
    assert!(
        matches!(err, FlightLogError::StoreUnavailable { ref message, .. } if message == "No flight log ids left"),
        "unexpected error: {err:?}"
    );

    // the existing record is untouched and can still be removed
    assert_eq!(store.list("1").await.expect("list").len(), 1);
    assert!(store.delete(u64::MAX).await.expect("delete"));
}

#[test]
fn test_store_backend_from_str() {
    assert_eq!("sqlite".parse::<StoreBackend>(), Ok(StoreBackend::Sqlite));
    assert_eq!("JSON".parse::<StoreBackend>(), Ok(StoreBackend::JsonFile));
    assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
    assert!("mongo".parse::<StoreBackend>().is_err());
}

#[test]
fn test_next_created_at_never_goes_backwards() {
    let future = Timestamp::now() + jiff::SignedDuration::from_hours(1);
    assert_eq!(next_created_at(Some(future)), future);

    let past = Timestamp::UNIX_EPOCH;
    assert!(next_created_at(Some(past)) > past);
}
