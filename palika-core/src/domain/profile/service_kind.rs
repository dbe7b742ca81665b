// palika-core/src/domain/profile/service_kind.rs

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ward-office services used by households during the fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Registration,
    Recommendation,
    Certification,
    SocialSecurity,
    Other,
}

impl Category for ServiceKind {
    const DOMAIN: &'static str = "governance";
    const SECTION: &'static str = "ward-services";

    fn all() -> &'static [Self] {
        &[
            Self::Registration,
            Self::Recommendation,
            Self::Certification,
            Self::SocialSecurity,
            Self::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Registration => "REGISTRATION",
            Self::Recommendation => "RECOMMENDATION",
            Self::Certification => "CERTIFICATION",
            Self::SocialSecurity => "SOCIAL_SECURITY",
            Self::Other => "OTHER",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::Registration => "Vital registration",
            Self::Recommendation => "Recommendation letters",
            Self::Certification => "Certification services",
            Self::SocialSecurity => "Social security allowance",
            Self::Other => "Other services",
        }
    }

    fn label_ne(&self) -> &'static str {
        match self {
            Self::Registration => "घटना दर्ता",
            Self::Recommendation => "सिफारिस",
            Self::Certification => "प्रमाणीकरण",
            Self::SocialSecurity => "सामाजिक सुरक्षा भत्ता",
            Self::Other => "अन्य सेवा",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
