use flightlog_core::{params::LogFlight, CommandProcessor, CommandProcessorBuilder, StoreBackend};
use tempfile::TempDir;

/// Helper function to create a test processor backed by a fresh file store
pub async fn create_test_processor(backend: StoreBackend) -> (TempDir, CommandProcessor) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_name = match backend {
        StoreBackend::JsonFile => "test.json",
        _ => "test.db",
    };
    let processor = CommandProcessorBuilder::new()
        .with_backend(backend)
        .with_database_path(Some(temp_dir.path().join(file_name)))
        .build()
        .await
        .expect("Failed to create processor");
    (temp_dir, processor)
}

/// A complete log request with the given route and callsign
#[allow(dead_code)]
pub fn log_params(origin: &str, destination: &str, vehicle: &str, callsign: &str) -> LogFlight {
    LogFlight {
        origin: origin.to_string(),
        destination: destination.to_string(),
        vehicle_type: vehicle.to_string(),
        callsign: callsign.to_string(),
        passengers: "300".to_string(),
        ..Default::default()
    }
}
