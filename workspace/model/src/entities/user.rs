use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::Serialize;
use std::fmt;

use super::{auth_group, auth_permission, prediction_result, sociodemographic_profile};

/// Field used as the login identifier.
pub const USERNAME_FIELD: &str = "email";

/// Fields that must be supplied besides the login identifier and password.
pub const REQUIRED_FIELDS: &[&str] = &[];

/// Represents an account that can sign in to the survey application.
/// Authentication is keyed on the email address; there is no separate username.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Given name.
    pub name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    /// Salted one-way hash in PHC format, or an unusable marker.
    #[serde(skip_serializing)]
    pub password: String,
    pub last_login: Option<ChronoDateTimeUtc>,
    /// New accounts start inactive and have to be activated explicitly.
    #[sea_orm(default_value = "false")]
    pub is_active: bool,
    /// Whether the user may sign in to the administration site.
    #[sea_orm(default_value = "false")]
    pub is_staff: bool,
    /// Holds every permission without it being granted explicitly.
    #[sea_orm(default_value = "false")]
    pub is_superuser: bool,
    pub date_joined: ChronoDateTimeUtc,
}

impl Model {
    /// Given name followed by both surnames.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.name, self.paternal_surname, self.maternal_surname
        )
    }

    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// Value of the login identifier field.
    pub fn username(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// At most one sociodemographic profile per user.
    #[sea_orm(has_one = "super::sociodemographic_profile::Entity")]
    SociodemographicProfile,
    /// A user accumulates prediction results over time.
    #[sea_orm(has_many = "super::prediction_result::Entity")]
    PredictionResult,
    #[sea_orm(has_many = "super::user_group::Entity")]
    UserGroup,
    #[sea_orm(has_many = "super::user_permission::Entity")]
    UserPermission,
}

impl Related<sociodemographic_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SociodemographicProfile.def()
    }
}

impl Related<prediction_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PredictionResult.def()
    }
}

impl Related<auth_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_group::Relation::Group.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_group::Relation::User.def().rev())
    }
}

impl Related<auth_permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_permission::Relation::Permission.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_permission::Relation::User.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.date_joined.is_not_set() {
            self.date_joined = ActiveValue::Set(Utc::now());
        }
        Ok(self)
    }
}
