// palika-core/src/ports/repository.rs

// This file defines what the reporting pipeline needs from storage, without
// knowing how it's done. The processors only ever read; the seeding and
// admin flows write. An adapter (DuckDB today) fills the contract.

use crate::domain::profile::DemographicSummary;
use crate::error::PalikaError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Untyped storage row for one (ward, category) cell of a section.
/// The category is still the storage code here; processors parse it back
/// into the section's closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWardCount {
    pub ward: u32,
    pub category: String,
    pub count: u64,
}

/// Chart-registry row: generated artifact path plus its timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub key: String,
    pub path: String,
    pub generated_at: String,
}

#[async_trait]
pub trait Repository: Send + Sync {
    /// Create tables when absent. Safe to call on every startup.
    async fn init_schema(&self) -> Result<(), PalikaError>;

    /// Upsert keyed on (section, ward, category): re-seeding the same key
    /// updates the count in place, never duplicates the row.
    async fn upsert_ward_count(
        &self,
        section: &str,
        ward: u32,
        category: &str,
        count: u64,
    ) -> Result<(), PalikaError>;

    /// Bulk variant wrapped in one transaction, all-or-nothing.
    async fn upsert_ward_counts(
        &self,
        section: &str,
        rows: &[RawWardCount],
    ) -> Result<(), PalikaError>;

    async fn fetch_ward_counts(&self, section: &str) -> Result<Vec<RawWardCount>, PalikaError>;

    async fn upsert_summary(&self, summary: &DemographicSummary) -> Result<(), PalikaError>;

    /// `None` means the singleton was never seeded (the 404 case), which is
    /// distinct from a storage failure.
    async fn fetch_summary(&self) -> Result<Option<DemographicSummary>, PalikaError>;

    async fn record_chart(&self, entry: &ChartEntry) -> Result<(), PalikaError>;
    async fn list_charts(&self) -> Result<Vec<ChartEntry>, PalikaError>;
    async fn delete_chart(&self, key: &str) -> Result<(), PalikaError>;

    async fn create_admin(&self, username: &str, token: &str) -> Result<(), PalikaError>;
}
