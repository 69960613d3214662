use crate::entity_iden::{ColumnIden, EntityIden};
use model::choices::{
    AnesthesiaType, Choice, DeliveryType, EconomicStatus, Education, MaritalStatus, Occupation,
    Parity, YesNo,
};
use model::entities::prelude::*;
use model::entities::{prediction_result, sociodemographic_profile, user};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Nullable choice column restricted to the codes declared by `C`.
fn choice<C: Choice>(column: ColumnIden) -> ColumnDef {
    let mut def = small_integer_null(column.clone());
    def.check(Expr::col(column).is_in(C::values()));
    def
}

/// Count column that can never go below zero.
fn non_negative(mut def: ColumnDef, column: ColumnIden) -> ColumnDef {
    def.check(Expr::col(column).gte(0));
    def
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use sociodemographic_profile::{Column, MAX_AGE, MIN_AGE, TEXT_MAX_LEN};

        let col = |c: Column| SociodemographicProfile::column(c);

        // Create sociodemographic_profiles table
        manager
            .create_table(
                Table::create()
                    .table(SociodemographicProfile::table())
                    .if_not_exists()
                    .col(pk_auto(col(Column::Id)))
                    .col(integer(col(Column::UserId)).unique_key())
                    .col(
                        small_integer(col(Column::Age))
                            .check(Expr::col(col(Column::Age)).between(MIN_AGE, MAX_AGE)),
                    )
                    .col(choice::<MaritalStatus>(col(Column::MaritalStatus)))
                    .col(choice::<Education>(col(Column::Education)))
                    .col(choice::<Occupation>(col(Column::Occupation)))
                    .col(choice::<EconomicStatus>(col(Column::EconomicStatus)))
                    .col(non_negative(
                        integer(col(Column::MonthlyIncome)),
                        col(Column::MonthlyIncome),
                    ))
                    .col(choice::<YesNo>(col(Column::DesiredPregnancy)))
                    .col(choice::<YesNo>(col(Column::PlannedPregnancy)))
                    .col(choice::<YesNo>(col(Column::TermBirth)))
                    .col(choice::<Parity>(col(Column::Parity)))
                    .col(non_negative(
                        small_integer(col(Column::NumberOfChildren)),
                        col(Column::NumberOfChildren),
                    ))
                    .col(choice::<YesNo>(col(Column::Breastfeeding)))
                    .col(non_negative(
                        small_integer(col(Column::BreastfeedingDuration)),
                        col(Column::BreastfeedingDuration),
                    ))
                    .col(choice::<YesNo>(col(Column::NeonatalIllness)))
                    .col(string_len(col(Column::NeonatalIllnessType), TEXT_MAX_LEN).default(""))
                    .col(choice::<YesNo>(col(Column::Anesthesia)))
                    .col(choice::<AnesthesiaType>(col(Column::AnesthesiaType)))
                    .col(choice::<DeliveryType>(col(Column::DeliveryType)))
                    .col(non_negative(
                        small_integer(col(Column::InfantAge)),
                        col(Column::InfantAge),
                    ))
                    .col(string_len(col(Column::PlaceOfCare), TEXT_MAX_LEN))
                    .col(choice::<YesNo>(col(Column::FamilySupport)))
                    .col(choice::<YesNo>(col(Column::PartnerSupport)))
                    .col(choice::<YesNo>(col(Column::Abortions)))
                    .col(non_negative(
                        small_integer(col(Column::NumberOfAbortions)).default(0).to_owned(),
                        col(Column::NumberOfAbortions),
                    ))
                    .col(timestamp_with_time_zone(col(Column::Created)))
                    .foreign_key(&mut SociodemographicProfile::owned_by::<User>(
                        Column::UserId,
                        user::Column::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        // Create prediction_results table
        manager
            .create_table(
                Table::create()
                    .table(PredictionResult::table())
                    .if_not_exists()
                    .col(pk_auto(PredictionResult::column(prediction_result::Column::Id)))
                    .col(integer(PredictionResult::column(
                        prediction_result::Column::Result,
                    )))
                    .col(timestamp_with_time_zone(PredictionResult::column(
                        prediction_result::Column::Created,
                    )))
                    .col(integer(PredictionResult::column(
                        prediction_result::Column::UserId,
                    )))
                    .foreign_key(&mut PredictionResult::owned_by::<User>(
                        prediction_result::Column::UserId,
                        user::Column::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prediction_results_user_id")
                    .table(PredictionResult::table())
                    .col(PredictionResult::column(prediction_result::Column::UserId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PredictionResult::table()).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SociodemographicProfile::table()).to_owned())
            .await
    }
}
