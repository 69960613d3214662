use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Email, 255).unique_key())
                    .col(string_len(Users::Name, 100).default(""))
                    .col(string_len(Users::PaternalSurname, 100).default(""))
                    .col(string_len(Users::MaternalSurname, 100).default(""))
                    .col(string_len(Users::Password, 128))
                    .col(timestamp_with_time_zone_null(Users::LastLogin))
                    .col(boolean(Users::IsActive).default(false))
                    .col(boolean(Users::IsStaff).default(false))
                    .col(boolean(Users::IsSuperuser).default(false))
                    .col(timestamp_with_time_zone(Users::DateJoined))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    PaternalSurname,
    MaternalSurname,
    Password,
    LastLogin,
    IsActive,
    IsStaff,
    IsSuperuser,
    DateJoined,
}
