// palika-core/src/domain/profile/summary.rs

// Municipality-wide demographic summary. This is the one singleton entity of
// the profile: aggregate scalars with no ward dimension. Derived ratios are
// recomputed from the underlying counts, never trusted from storage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicSummary {
    pub total_population: u64,
    pub male_population: u64,
    pub female_population: u64,
    pub total_households: u64,
    /// Literate share of the 5+ population, percent.
    pub literacy_rate: f64,
}

impl DemographicSummary {
    /// Males per 100 females. Zero female population yields 0 rather than a
    /// division error, same convention as the percentage aggregator.
    pub fn sex_ratio(&self) -> f64 {
        if self.female_population == 0 {
            return 0.0;
        }
        self.male_population as f64 * 100.0 / self.female_population as f64
    }

    /// Average household size; 0 when no households are recorded.
    pub fn average_family_size(&self) -> f64 {
        if self.total_households == 0 {
            return 0.0;
        }
        self.total_population as f64 / self.total_households as f64
    }
}
