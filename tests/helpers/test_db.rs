use phonebook::database::Database;
use uuid::Uuid;

pub async fn setup_test_db() -> Database {
    // File-based SQLite with a unique name per test for parallel execution
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url).expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run test migrations");

    db
}

pub async fn teardown_test_db(db: Database) {
    // Close the connection
    drop(db);
    // Note: Test database files will be cleaned up manually or by .gitignore
}
