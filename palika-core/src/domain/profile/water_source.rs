// palika-core/src/domain/profile/water_source.rs

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main source of drinking water for the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    PipedTap,
    TubeWell,
    Spring,
    River,
    Other,
}

impl Category for WaterSource {
    const DOMAIN: &'static str = "environment";
    const SECTION: &'static str = "drinking-water";

    fn all() -> &'static [Self] {
        &[
            Self::PipedTap,
            Self::TubeWell,
            Self::Spring,
            Self::River,
            Self::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::PipedTap => "PIPED_TAP",
            Self::TubeWell => "TUBE_WELL",
            Self::Spring => "SPRING",
            Self::River => "RIVER",
            Self::Other => "OTHER",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::PipedTap => "Piped tap water",
            Self::TubeWell => "Tube well / hand pump",
            Self::Spring => "Spring / well",
            Self::River => "River / stream",
            Self::Other => "Other",
        }
    }

    fn label_ne(&self) -> &'static str {
        match self {
            Self::PipedTap => "पाइपधारा",
            Self::TubeWell => "ट्युबवेल/हाते पम्प",
            Self::Spring => "मूल/इनार",
            Self::River => "नदी/खोला",
            Self::Other => "अन्य",
        }
    }
}

impl fmt::Display for WaterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
