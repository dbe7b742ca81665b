// palika-core/src/application/processors/mod.rs

pub mod categorical;
pub mod summary;

pub use categorical::CategoricalSection;
pub use summary::SummarySection;

use crate::domain::report::PdfSection;
use crate::error::PalikaError;
use crate::infrastructure::charts::ChartService;
use crate::ports::repository::Repository;
use async_trait::async_trait;

/// One report section: knows how to read its rows, aggregate them and
/// produce both the JSON view and the PDF-ready block tree.
///
/// The contract distinguishes three outcomes:
/// - rows exist            -> Ok(data)
/// - no rows were seeded   -> Err(DomainError::NoData), views answer 404
/// - storage/parse failure -> any other error, propagated untouched
#[async_trait]
pub trait SectionProcessor: Send + Sync {
    /// Registry key, e.g. "economics/wall-material".
    fn key(&self) -> String;

    fn title_en(&self) -> &str;
    fn title_ne(&self) -> &str;

    /// Aggregated data for the JSON API. At least `municipality_data`;
    /// ward-indexed sections add `ward_data`.
    async fn get_data(&self, repo: &dyn Repository) -> Result<serde_json::Value, PalikaError>;

    /// Full treatment for the report: narrative, tables, generated charts.
    async fn process_for_pdf(
        &self,
        repo: &dyn Repository,
        charts: &ChartService,
    ) -> Result<PdfSection, PalikaError>;
}
