// palika-core/src/domain/profile/gender.rs

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Category for Gender {
    const DOMAIN: &'static str = "demographics";
    const SECTION: &'static str = "population-by-gender";

    fn all() -> &'static [Self] {
        &[Self::Male, Self::Female, Self::Other]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    fn label_ne(&self) -> &'static str {
        match self {
            Self::Male => "पुरुष",
            Self::Female => "महिला",
            Self::Other => "अन्य",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
