use accounts::UserManager;
use sea_orm::{Database, DatabaseConnection};

use crate::cli::commands::initdb::apply_migrations;

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    apply_migrations(&db)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a UserManager backed by a fresh test database
pub async fn setup_test_manager() -> UserManager {
    UserManager::new(setup_test_db().await)
}
