use accounts::survey;
use anyhow::Result;
use tracing::{info, trace};

use crate::config::connect;

pub async fn record_prediction(database_url: &str, email: &str, result: i32) -> Result<()> {
    trace!("Entering record_prediction command");
    let db = connect(database_url).await?;

    let prediction = survey::record_prediction_for_email(&db, email, result).await?;
    info!("Stored prediction {} for {}", prediction.id, email);
    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}
