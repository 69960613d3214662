use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::Serialize;

use super::user;

/// Outcome of one prediction run for a user. Results are only ever appended.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "prediction_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Predicted class or score.
    pub result: i32,
    pub created: ChronoDateTimeUtc,
    pub user_id: i32,
}

pub fn label(owner_name: &str) -> String {
    format!("Predicción para {}", owner_name)
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
