//! Writing and reading the survey records owned by a user.
//!
//! Validation of ages, counts and choice codes is left to the database; a
//! rejected write comes back as an [`AccountError`].

use model::entities::{prediction_result, sociodemographic_profile, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info, instrument};

use crate::email::normalize_email;
use crate::error::{AccountError, Result};

/// Stores the sociodemographic answers of a user.
///
/// The `user_id` of `answers` is overwritten. A second profile for the same
/// user is rejected by the store.
#[instrument(skip(db, answers))]
pub async fn submit_profile(
    db: &DatabaseConnection,
    user_id: i32,
    mut answers: sociodemographic_profile::ActiveModel,
) -> Result<sociodemographic_profile::Model> {
    answers.user_id = Set(user_id);
    let profile = answers.insert(db).await?;
    info!("Stored profile {} for user {}", profile.id, user_id);
    Ok(profile)
}

pub async fn profile_of(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Option<sociodemographic_profile::Model>> {
    Ok(sociodemographic_profile::Entity::find()
        .filter(sociodemographic_profile::Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

/// Appends a prediction outcome for a user.
#[instrument(skip(db))]
pub async fn record_prediction(
    db: &DatabaseConnection,
    user_id: i32,
    result: i32,
) -> Result<prediction_result::Model> {
    let prediction = prediction_result::ActiveModel {
        user_id: Set(user_id),
        result: Set(result),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!("Recorded prediction {} for user {}", prediction.id, user_id);
    Ok(prediction)
}

/// Appends a prediction for the user with the given login email.
pub async fn record_prediction_for_email(
    db: &DatabaseConnection,
    email: &str,
    result: i32,
) -> Result<prediction_result::Model> {
    let owner = user::Entity::find()
        .filter(user::Column::Email.eq(normalize_email(email)))
        .one(db)
        .await?
        .ok_or_else(|| AccountError::UnknownEmail(email.to_string()))?;
    record_prediction(db, owner.id, result).await
}

/// All predictions of a user, newest first.
pub async fn predictions_for(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<prediction_result::Model>> {
    Ok(prediction_result::Entity::find()
        .filter(prediction_result::Column::UserId.eq(user_id))
        .order_by_desc(prediction_result::Column::Created)
        .order_by_desc(prediction_result::Column::Id)
        .all(db)
        .await?)
}
