use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create auth_groups table
        manager
            .create_table(
                Table::create()
                    .table(AuthGroups::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthGroups::Id))
                    .col(string_len(AuthGroups::Name, 150).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create auth_permissions table
        manager
            .create_table(
                Table::create()
                    .table(AuthPermissions::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthPermissions::Id))
                    .col(string_len(AuthPermissions::Codename, 100).unique_key())
                    .col(string_len(AuthPermissions::Name, 255))
                    .to_owned(),
            )
            .await?;

        // Create user_groups table (join table)
        manager
            .create_table(
                Table::create()
                    .table(UserGroups::Table)
                    .if_not_exists()
                    .col(integer(UserGroups::UserId))
                    .col(integer(UserGroups::GroupId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_groups")
                            .col(UserGroups::UserId)
                            .col(UserGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_groups_user")
                            .from(UserGroups::Table, UserGroups::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_groups_group")
                            .from(UserGroups::Table, UserGroups::GroupId)
                            .to(AuthGroups::Table, AuthGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create user_permissions table (join table)
        manager
            .create_table(
                Table::create()
                    .table(UserPermissions::Table)
                    .if_not_exists()
                    .col(integer(UserPermissions::UserId))
                    .col(integer(UserPermissions::PermissionId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_permissions")
                            .col(UserPermissions::UserId)
                            .col(UserPermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_permissions_user")
                            .from(UserPermissions::Table, UserPermissions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_permissions_permission")
                            .from(UserPermissions::Table, UserPermissions::PermissionId)
                            .to(AuthPermissions::Table, AuthPermissions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create group_permissions table (join table)
        manager
            .create_table(
                Table::create()
                    .table(GroupPermissions::Table)
                    .if_not_exists()
                    .col(integer(GroupPermissions::GroupId))
                    .col(integer(GroupPermissions::PermissionId))
                    .primary_key(
                        Index::create()
                            .name("pk_group_permissions")
                            .col(GroupPermissions::GroupId)
                            .col(GroupPermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_permissions_group")
                            .from(GroupPermissions::Table, GroupPermissions::GroupId)
                            .to(AuthGroups::Table, AuthGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_permissions_permission")
                            .from(GroupPermissions::Table, GroupPermissions::PermissionId)
                            .to(AuthPermissions::Table, AuthPermissions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupPermissions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserPermissions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserGroups::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthPermissions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthGroups::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AuthGroups {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum AuthPermissions {
    Table,
    Id,
    Codename,
    Name,
}

#[derive(DeriveIden)]
enum UserGroups {
    Table,
    UserId,
    GroupId,
}

#[derive(DeriveIden)]
enum UserPermissions {
    Table,
    UserId,
    PermissionId,
}

#[derive(DeriveIden)]
enum GroupPermissions {
    Table,
    GroupId,
    PermissionId,
}
