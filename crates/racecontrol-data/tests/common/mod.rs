#![allow(dead_code)]

use racecontrol_data::{DataService, DataServiceBuilder};
use tempfile::TempDir;

pub const TEST_DB_NAME: &str = "TestDatabase";
pub const TEST_FOLDER: &str = "RaceControl/tests";

/// Helper function to create a data service over a throwaway data root
pub fn create_test_service() -> (TempDir, DataService) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let service = build_service(&temp_dir);
    (temp_dir, service)
}

/// Builds a data service against an existing test data root
pub fn build_service(temp_dir: &TempDir) -> DataService {
    DataServiceBuilder::new(TEST_DB_NAME, TEST_FOLDER)
        .with_data_root(temp_dir.path())
        .build()
        .expect("Failed to build data service")
}
