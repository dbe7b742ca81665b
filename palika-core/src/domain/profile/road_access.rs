// palika-core/src/domain/profile/road_access.rs

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of road reaching the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadAccess {
    Blacktop,
    Gravelled,
    Earthen,
    NoRoad,
}

impl Category for RoadAccess {
    const DOMAIN: &'static str = "infrastructure";
    const SECTION: &'static str = "road-access";

    fn all() -> &'static [Self] {
        &[Self::Blacktop, Self::Gravelled, Self::Earthen, Self::NoRoad]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Blacktop => "BLACKTOP",
            Self::Gravelled => "GRAVELLED",
            Self::Earthen => "EARTHEN",
            Self::NoRoad => "NO_ROAD",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::Blacktop => "Blacktopped road",
            Self::Gravelled => "Gravelled road",
            Self::Earthen => "Earthen road",
            Self::NoRoad => "No road access",
        }
    }

    fn label_ne(&self) -> &'static str {
        match self {
            Self::Blacktop => "कालोपत्रे सडक",
            Self::Gravelled => "ग्राभेल सडक",
            Self::Earthen => "कच्ची सडक",
            Self::NoRoad => "सडक पहुँच नभएको",
        }
    }
}

impl fmt::Display for RoadAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
