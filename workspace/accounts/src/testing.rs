use migration::{Migrator, MigratorTrait};
use model::entities::sociodemographic_profile;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Set};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::manager::{NewUser, UserManager};

/// Create an in-memory SQLite database with all migrations applied.
pub async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// A manager backed by a fresh database.
pub async fn setup_manager() -> UserManager {
    init_test_tracing();
    let db = setup_db().await.expect("Failed to set up test database");
    UserManager::new(db)
}

/// Extra fields for a typical survey participant.
pub fn participant() -> NewUser {
    NewUser {
        name: "Ana".to_string(),
        paternal_surname: "Lopez".to_string(),
        maternal_surname: "Diaz".to_string(),
        ..Default::default()
    }
}

/// Profile answers with every required column filled in.
pub fn answers(age: i16) -> sociodemographic_profile::ActiveModel {
    sociodemographic_profile::ActiveModel {
        age: Set(age),
        monthly_income: Set(12000),
        number_of_children: Set(2),
        breastfeeding_duration: Set(4),
        neonatal_illness_type: Set(String::new()),
        infant_age: Set(2),
        place_of_care: Set("Centro de Salud".to_string()),
        ..Default::default()
    }
}

/// Initialize tracing for tests with output captured by the test harness.
///
/// The log level is taken from RUST_LOG, defaulting to WARN. Only the first
/// call installs the subscriber.
fn init_test_tracing() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let _ = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_test_writer()
        .try_init();
}
