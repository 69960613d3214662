use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{debug, error, info, trace};

use crate::config::connect;

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");

    let db = connect(database_url).await.inspect_err(|e| {
        error!("Failed to connect to database: {}", e);
    })?;

    apply_migrations(&db).await?;

    info!("Database initialization completed successfully!");
    Ok(())
}

/// Apply every pending migration to `db`.
pub async fn apply_migrations(db: &DatabaseConnection) -> Result<()> {
    info!("Running database migrations");
    match Migrator::up(db, None).await {
        Ok(_) => {
            debug!("All pending migrations have been applied");
            Ok(())
        }
        Err(e) => {
            error!("Failed to run database migrations: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database};

    #[tokio::test]
    async fn test_apply_migrations_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        apply_migrations(&db).await.unwrap();
        apply_migrations(&db).await.unwrap();

        let status = Migrator::get_pending_migrations(&db).await.unwrap();
        assert!(status.is_empty());

        // All survey tables exist
        for table in [
            "users",
            "sociodemographic_profiles",
            "prediction_results",
            "auth_groups",
            "auth_permissions",
        ] {
            db.execute_unprepared(&format!("SELECT COUNT(*) FROM {}", table))
                .await
                .unwrap();
        }
    }
}
