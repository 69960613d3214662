use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A named capability that can be granted to users directly or through groups.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "auth_permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier checked by `has_permission`, e.g. `view_prediction_result`.
    #[sea_orm(unique)]
    pub codename: String,
    /// Human readable description.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_permission::Entity")]
    UserPermission,
    #[sea_orm(has_many = "super::group_permission::Entity")]
    GroupPermission,
}

impl ActiveModelBehavior for ActiveModel {}
