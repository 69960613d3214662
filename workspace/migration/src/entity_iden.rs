use model::entities::prelude::*;
use sea_orm::entity::prelude::*;
use sea_orm::Iden;
use sea_orm_migration::prelude::{ForeignKey, ForeignKeyAction, ForeignKeyCreateStatement};

/// Table and column identifiers taken from the entity definitions, so the
/// schema cannot drift from the models it backs.
pub trait EntityIden: EntityTrait {
    fn table() -> TableIden {
        TableIden(Self::default().table_name().to_string())
    }

    fn column<C: ColumnTrait + Iden>(column: C) -> ColumnIden {
        let mut s = String::new();
        column.unquoted(&mut s);
        ColumnIden(s)
    }

    /// Foreign key from `column` to `parent_key` of the owning entity `P`.
    ///
    /// Rows of this table are deleted and re-keyed together with their owner.
    /// The constraint is named `fk_<table>_<column>`.
    fn owned_by<P: EntityIden>(column: Self::Column, parent_key: P::Column) -> ForeignKeyCreateStatement {
        let table = Self::table();
        let column = Self::column(column);
        ForeignKey::create()
            .name(format!("fk_{}_{}", table.0, column.0))
            .from(table, column)
            .to(P::table(), P::column(parent_key))
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .to_owned()
    }
}

impl EntityIden for User {}
impl EntityIden for SociodemographicProfile {}
impl EntityIden for PredictionResult {}

#[derive(Debug, Clone)]
pub struct TableIden(String);

impl Iden for TableIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(&self.0);
    }
}

#[derive(Debug, Clone)]
pub struct ColumnIden(String);

impl Iden for ColumnIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(&self.0);
    }
}
