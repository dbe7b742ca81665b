// palika-core/src/domain/profile/wall_material.rs

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outer-wall construction of the household dwelling. The codes follow the
/// census data-entry sheets (CEMENT_JOINED = cement-bonded brick/stone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMaterial {
    CementJoined,
    MudJoined,
    Wood,
    Bamboo,
    Tin,
    Other,
}

impl Category for WallMaterial {
    const DOMAIN: &'static str = "economics";
    const SECTION: &'static str = "wall-material";

    fn all() -> &'static [Self] {
        &[
            Self::CementJoined,
            Self::MudJoined,
            Self::Wood,
            Self::Bamboo,
            Self::Tin,
            Self::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::CementJoined => "CEMENT_JOINED",
            Self::MudJoined => "MUD_JOINED",
            Self::Wood => "WOOD",
            Self::Bamboo => "BAMBOO",
            Self::Tin => "TIN",
            Self::Other => "OTHER",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::CementJoined => "Cement-bonded bricks/stone",
            Self::MudJoined => "Mud-bonded bricks/stone",
            Self::Wood => "Wood/planks",
            Self::Bamboo => "Bamboo",
            Self::Tin => "Tin/metal sheet",
            Self::Other => "Other",
        }
    }

    fn label_ne(&self) -> &'static str {
        match self {
            Self::CementJoined => "सिमेन्टको जोडाइ भएको इँटा/ढुङ्गा",
            Self::MudJoined => "माटोको जोडाइ भएको इँटा/ढुङ्गा",
            Self::Wood => "काठ/फल्याक",
            Self::Bamboo => "बाँसजन्य",
            Self::Tin => "जस्ता/टिन",
            Self::Other => "अन्य",
        }
    }
}

impl fmt::Display for WallMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
