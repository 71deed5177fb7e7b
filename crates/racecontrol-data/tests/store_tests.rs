//! Lifecycle tests for store provisioning, reuse, and teardown.

use std::time::Duration;

mod common;

use common::{TEST_DB_NAME, TEST_FOLDER, build_service, create_test_service};

#[test]
fn test_first_build_creates_database_file() {
    let (temp_dir, service) = create_test_service();

    let expected = temp_dir
        .path()
        .join(TEST_FOLDER)
        .join(format!("{TEST_DB_NAME}.db"));
    assert_eq!(service.path(), expected);
    assert!(expected.exists());
}

#[test]
fn test_rebuild_does_not_rewrite_existing_file() {
    let (temp_dir, service) = create_test_service();
    let db_path = service.path().to_path_buf();
    service.close().expect("Failed to close data service");

    let modified_before = std::fs::metadata(&db_path)
        .expect("Failed to stat database file")
        .modified()
        .expect("Failed to read modification time");

    // Give a rewrite a chance to show up as a newer timestamp
    std::thread::sleep(Duration::from_millis(50));

    let service = build_service(&temp_dir);
    service.close().expect("Failed to close data service");

    let modified_after = std::fs::metadata(&db_path)
        .expect("Failed to stat database file")
        .modified()
        .expect("Failed to read modification time");

    assert_eq!(modified_before, modified_after);
}

#[test]
fn test_rebuild_preserves_existing_records() {
    let (temp_dir, service) = create_test_service();
    service
        .continents()
        .create_new("EU")
        .expect("Failed to create continent");
    service.close().expect("Failed to close data service");

    let service = build_service(&temp_dir);
    assert!(
        service
            .continents()
            .check_exists("EU")
            .expect("Failed to check continent")
    );
}

#[test]
fn test_close_keeps_backing_file() {
    let (_temp_dir, service) = create_test_service();
    let db_path = service.path().to_path_buf();

    service.close().expect("Failed to close data service");
    assert!(db_path.exists());
}

#[test]
fn test_delete_source_removes_backing_file() {
    let (_temp_dir, service) = create_test_service();
    let db_path = service.path().to_path_buf();
    assert!(db_path.exists());

    service
        .delete_source()
        .expect("Failed to delete data source");
    assert!(!db_path.exists());
}
