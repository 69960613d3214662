use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::Serialize;

use super::user;
use crate::choices::{
    AnesthesiaType, DeliveryType, EconomicStatus, Education, MaritalStatus, Occupation, Parity,
    YesNo,
};

/// Youngest age accepted by the survey.
pub const MIN_AGE: i16 = 12;
/// Oldest age accepted by the survey.
pub const MAX_AGE: i16 = 100;
/// Longest value accepted by the free-text columns.
pub const TEXT_MAX_LEN: u32 = 100;

/// Sociodemographic and obstetric answers given by a user.
///
/// Each user has at most one profile. Range and enumeration constraints are
/// enforced by the database; every `Option` choice column is `None` until
/// the question is answered.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "sociodemographic_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    /// Between [`MIN_AGE`] and [`MAX_AGE`], inclusive.
    pub age: i16,
    pub marital_status: Option<MaritalStatus>,
    pub education: Option<Education>,
    pub occupation: Option<Occupation>,
    pub economic_status: Option<EconomicStatus>,
    pub monthly_income: i32,
    pub desired_pregnancy: Option<YesNo>,
    pub planned_pregnancy: Option<YesNo>,
    pub term_birth: Option<YesNo>,
    pub parity: Option<Parity>,
    pub number_of_children: i16,
    pub breastfeeding: Option<YesNo>,
    pub breastfeeding_duration: i16,
    pub neonatal_illness: Option<YesNo>,
    /// Free-text description, may be blank.
    pub neonatal_illness_type: String,
    pub anesthesia: Option<YesNo>,
    pub anesthesia_type: Option<AnesthesiaType>,
    pub delivery_type: Option<DeliveryType>,
    pub infant_age: i16,
    pub place_of_care: String,
    pub family_support: Option<YesNo>,
    pub partner_support: Option<YesNo>,
    pub abortions: Option<YesNo>,
    #[sea_orm(default_value = "0")]
    pub number_of_abortions: i16,
    pub created: ChronoDateTimeUtc,
}

/// Display label for a profile owned by a user with the given name.
pub fn label(owner_name: &str) -> String {
    format!("Datos de {}", owner_name)
}

impl Model {
    /// Renders the display label, loading the owner's name.
    pub async fn describe<C: ConnectionTrait>(&self, db: &C) -> Result<String, DbErr> {
        let owner = self
            .find_related(user::Entity)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", self.user_id)))?;
        Ok(label(&owner.name))
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::UserId",
        to = "user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.created = ActiveValue::Set(Utc::now());
        } else {
            self.created = ActiveValue::NotSet;
        }
        Ok(self)
    }
}
