use accounts::UserManager;
use anyhow::Result;
use tracing::{info, trace};

use crate::config::connect;

pub async fn create_superuser(database_url: &str, email: &str, password: &str) -> Result<()> {
    trace!("Entering create_superuser command");
    let manager = UserManager::new(connect(database_url).await?);

    let user = manager.create_superuser(email, password).await?;
    info!("Superuser {} is ready", user.email);
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}
