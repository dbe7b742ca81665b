// palika-core/src/domain/profile/literacy.rs

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literacy status of the population aged five and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literacy {
    CanReadWrite,
    ReadOnly,
    Illiterate,
}

impl Category for Literacy {
    const DOMAIN: &'static str = "social";
    const SECTION: &'static str = "literacy";

    fn all() -> &'static [Self] {
        &[Self::CanReadWrite, Self::ReadOnly, Self::Illiterate]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::CanReadWrite => "CAN_READ_WRITE",
            Self::ReadOnly => "READ_ONLY",
            Self::Illiterate => "ILLITERATE",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::CanReadWrite => "Can read and write",
            Self::ReadOnly => "Can read only",
            Self::Illiterate => "Illiterate",
        }
    }

    fn label_ne(&self) -> &'static str {
        match self {
            Self::CanReadWrite => "पढ्न र लेख्न जान्ने",
            Self::ReadOnly => "पढ्न मात्र जान्ने",
            Self::Illiterate => "निरक्षर",
        }
    }
}

impl fmt::Display for Literacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
