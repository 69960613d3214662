//! Authorization capabilities of a user.
//!
//! Permissions are named by `codename` and may be granted to a user directly
//! or through any group the user belongs to. An inactive user holds no
//! permissions at all; an active superuser holds every permission.

use std::collections::BTreeSet;

use async_trait::async_trait;
use model::entities::{
    auth_group, auth_permission, group_permission, user, user_group, user_permission,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};
use tracing::{debug, instrument};

use crate::error::Result;

/// Capability checks exposed by an authenticatable identity.
#[async_trait]
pub trait Capabilities {
    /// May sign in to the administration site.
    fn is_staff(&self) -> bool;

    fn is_superuser(&self) -> bool;

    /// Whether the permission `codename` is held, directly or through a group.
    async fn has_permission(&self, db: &DatabaseConnection, codename: &str) -> Result<bool>;

    /// Whether the identity is a member of the group called `name`.
    async fn has_group(&self, db: &DatabaseConnection, name: &str) -> Result<bool>;
}

#[async_trait]
impl Capabilities for user::Model {
    fn is_staff(&self) -> bool {
        self.is_staff
    }

    fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    async fn has_permission(&self, db: &DatabaseConnection, codename: &str) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }
        if self.is_superuser {
            return Ok(true);
        }
        Ok(all_permissions(db, self).await?.contains(codename))
    }

    async fn has_group(&self, db: &DatabaseConnection, name: &str) -> Result<bool> {
        let count = self
            .find_related(auth_group::Entity)
            .filter(auth_group::Column::Name.eq(name))
            .count(db)
            .await?;
        Ok(count > 0)
    }
}

/// Codenames granted to the user directly.
pub async fn user_permissions(db: &DatabaseConnection, user: &user::Model) -> Result<BTreeSet<String>> {
    let permissions = user.find_related(auth_permission::Entity).all(db).await?;
    Ok(permissions.into_iter().map(|p| p.codename).collect())
}

/// Codenames the user receives through group membership.
pub async fn group_permissions(db: &DatabaseConnection, user: &user::Model) -> Result<BTreeSet<String>> {
    let mut codenames = BTreeSet::new();
    for group in user.find_related(auth_group::Entity).all(db).await? {
        let permissions = group.find_related(auth_permission::Entity).all(db).await?;
        codenames.extend(permissions.into_iter().map(|p| p.codename));
    }
    Ok(codenames)
}

/// Every codename the user holds, ignoring the active and superuser flags.
pub async fn all_permissions(db: &DatabaseConnection, user: &user::Model) -> Result<BTreeSet<String>> {
    let mut codenames = user_permissions(db, user).await?;
    codenames.extend(group_permissions(db, user).await?);
    Ok(codenames)
}

/// Returns the permission with `codename`, creating it if needed.
#[instrument(skip(db))]
pub async fn ensure_permission(
    db: &DatabaseConnection,
    codename: &str,
    name: &str,
) -> Result<auth_permission::Model> {
    let existing = auth_permission::Entity::find()
        .filter(auth_permission::Column::Codename.eq(codename))
        .one(db)
        .await?;
    if let Some(permission) = existing {
        return Ok(permission);
    }

    debug!("Creating permission {}", codename);
    let permission = auth_permission::ActiveModel {
        codename: Set(codename.to_string()),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(permission)
}

/// Returns the group called `name`, creating it if needed.
#[instrument(skip(db))]
pub async fn ensure_group(db: &DatabaseConnection, name: &str) -> Result<auth_group::Model> {
    let existing = auth_group::Entity::find()
        .filter(auth_group::Column::Name.eq(name))
        .one(db)
        .await?;
    if let Some(group) = existing {
        return Ok(group);
    }

    debug!("Creating group {}", name);
    let group = auth_group::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(group)
}

pub async fn grant_permission(
    db: &DatabaseConnection,
    user: &user::Model,
    permission: &auth_permission::Model,
) -> Result<()> {
    let granted = user_permission::Entity::find_by_id((user.id, permission.id))
        .one(db)
        .await?;
    if granted.is_none() {
        user_permission::ActiveModel {
            user_id: Set(user.id),
            permission_id: Set(permission.id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

pub async fn add_to_group(
    db: &DatabaseConnection,
    user: &user::Model,
    group: &auth_group::Model,
) -> Result<()> {
    let member = user_group::Entity::find_by_id((user.id, group.id))
        .one(db)
        .await?;
    if member.is_none() {
        user_group::ActiveModel {
            user_id: Set(user.id),
            group_id: Set(group.id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

pub async fn grant_group_permission(
    db: &DatabaseConnection,
    group: &auth_group::Model,
    permission: &auth_permission::Model,
) -> Result<()> {
    let granted = group_permission::Entity::find_by_id((group.id, permission.id))
        .one(db)
        .await?;
    if granted.is_none() {
        group_permission::ActiveModel {
            group_id: Set(group.id),
            permission_id: Set(permission.id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}
