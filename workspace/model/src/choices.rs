//! Fixed enumerations used by the survey records.
//!
//! Every enumeration is stored as a small integer code. The codes and their
//! labels are what the survey forms have always shown, so they must not be
//! renumbered. A column that has not been answered yet is stored as NULL and
//! surfaces as `None`, which is the form's placeholder entry.

use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

/// Shared behaviour of the survey enumerations.
pub trait Choice: ActiveEnum<Value = i16> + Iterable + Copy + 'static {
    /// Label of the placeholder entry shown while the field is unset.
    const PLACEHOLDER: &'static str;

    /// Human readable label for this code.
    fn label(&self) -> &'static str;

    /// The stored integer code.
    fn code(&self) -> i16 {
        self.to_value()
    }

    /// Looks up a code, rejecting anything outside the declared set.
    fn from_code(code: i16) -> Result<Self, DbErr> {
        Self::try_from_value(&code)
    }

    /// All entries in form order, starting with the unset placeholder.
    fn choices() -> Vec<(Option<i16>, &'static str)> {
        std::iter::once((None, Self::PLACEHOLDER))
            .chain(Self::iter().map(|c| (Some(c.code()), c.label())))
            .collect()
    }
}

/// Label for an optional answer, falling back to the placeholder.
pub fn display_label<C: Choice>(value: Option<C>) -> &'static str {
    value.map_or(C::PLACEHOLDER, |c| c.label())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum MaritalStatus {
    #[sea_orm(num_value = 1)]
    Married,
    #[sea_orm(num_value = 2)]
    CommonLawUnion,
    #[sea_orm(num_value = 3)]
    Single,
    #[sea_orm(num_value = 4)]
    Widowed,
}

impl Choice for MaritalStatus {
    const PLACEHOLDER: &'static str = "Estado civil";

    fn label(&self) -> &'static str {
        match self {
            Self::Married => "Casada",
            Self::CommonLawUnion => "Unión libre",
            Self::Single => "Soltera",
            Self::Widowed => "Viuda",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Education {
    #[sea_orm(num_value = 1)]
    Primary,
    #[sea_orm(num_value = 2)]
    Secondary,
    #[sea_orm(num_value = 3)]
    HighSchool,
    #[sea_orm(num_value = 4)]
    Bachelor,
    #[sea_orm(num_value = 5)]
    Postgraduate,
}

impl Choice for Education {
    const PLACEHOLDER: &'static str = "Escolaridad";

    fn label(&self) -> &'static str {
        match self {
            Self::Primary => "Primaria",
            Self::Secondary => "Secundaria",
            Self::HighSchool => "Bachillerato",
            Self::Bachelor => "Licenciatura",
            Self::Postgraduate => "Posgrado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Occupation {
    #[sea_orm(num_value = 1)]
    Homemaker,
    #[sea_orm(num_value = 2)]
    Employed,
    #[sea_orm(num_value = 3)]
    Student,
    #[sea_orm(num_value = 4)]
    Unemployed,
}

impl Choice for Occupation {
    const PLACEHOLDER: &'static str = "Ocupación";

    fn label(&self) -> &'static str {
        match self {
            Self::Homemaker => "Ama de casa",
            Self::Employed => "Empleada",
            Self::Student => "Estudiante",
            Self::Unemployed => "Desempleada",
        }
    }
}

/// Socioeconomic tier, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum EconomicStatus {
    #[sea_orm(num_value = 1)]
    LowLow,
    #[sea_orm(num_value = 2)]
    LowHigh,
    #[sea_orm(num_value = 3)]
    MiddleLow,
    #[sea_orm(num_value = 4)]
    MiddleHigh,
}

impl Choice for EconomicStatus {
    const PLACEHOLDER: &'static str = "Estatus económico";

    fn label(&self) -> &'static str {
        match self {
            Self::LowLow => "Baja baja",
            Self::LowHigh => "Baja alta",
            Self::MiddleLow => "Media baja",
            Self::MiddleHigh => "Media alta",
        }
    }
}

/// Generic yes/no answer shared by most survey questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum YesNo {
    #[sea_orm(num_value = 1)]
    Yes,
    #[sea_orm(num_value = 2)]
    No,
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl Choice for YesNo {
    const PLACEHOLDER: &'static str = "Seleccione";

    fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Sí",
            Self::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Parity {
    /// First pregnancy.
    #[sea_orm(num_value = 1)]
    Primigravida,
    #[sea_orm(num_value = 2)]
    Multigravida,
}

impl Choice for Parity {
    const PLACEHOLDER: &'static str = "Paridad";

    fn label(&self) -> &'static str {
        match self {
            Self::Primigravida => "Primigesta",
            Self::Multigravida => "Multigesta",
        }
    }
}

// "Other" is code 0 but listed last on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum AnesthesiaType {
    #[sea_orm(num_value = 1)]
    Inhalational,
    #[sea_orm(num_value = 2)]
    General,
    #[sea_orm(num_value = 0)]
    Other,
}

impl Choice for AnesthesiaType {
    const PLACEHOLDER: &'static str = "Tipos de anestesia";

    fn label(&self) -> &'static str {
        match self {
            Self::Inhalational => "Anestesia inhalatoria",
            Self::General => "Anestesia general",
            Self::Other => "Otra",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum DeliveryType {
    #[sea_orm(num_value = 1)]
    Vaginal,
    #[sea_orm(num_value = 2)]
    Cesarean,
}

impl Choice for DeliveryType {
    const PLACEHOLDER: &'static str = "Tipos de parto";

    fn label(&self) -> &'static str {
        match self {
            Self::Vaginal => "Vaginal",
            Self::Cesarean => "Cesárea",
        }
    }
}
