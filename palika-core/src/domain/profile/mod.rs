// palika-core/src/domain/profile/mod.rs

pub mod category;
pub mod gender;
pub mod literacy;
pub mod road_access;
pub mod service_kind;
pub mod summary;
pub mod wall_material;
pub mod water_source;

// Re-exports
pub use category::Category;
pub use gender::Gender;
pub use literacy::Literacy;
pub use road_access::RoadAccess;
pub use service_kind::ServiceKind;
pub use summary::DemographicSummary;
pub use wall_material::WallMaterial;
pub use water_source::WaterSource;

use serde::{Deserialize, Serialize};

/// Municipality identity, shared by every report header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Municipality {
    pub name_en: String,
    pub name_ne: String,
    /// Number of wards; ward numbers run 1..=ward_count.
    pub ward_count: u32,
}

impl Municipality {
    pub fn validate_ward(&self, ward: u32) -> Result<(), crate::domain::error::DomainError> {
        if ward == 0 || ward > self.ward_count {
            return Err(crate::domain::error::DomainError::InvalidWard {
                ward,
                max: self.ward_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ward_bounds() {
        let m = Municipality {
            name_en: "Sundar Municipality".into(),
            name_ne: "सुन्दर नगरपालिका".into(),
            ward_count: 12,
        };
        assert!(m.validate_ward(1).is_ok());
        assert!(m.validate_ward(12).is_ok());
        assert!(m.validate_ward(0).is_err());
        assert!(m.validate_ward(13).is_err());
    }
}
