// palika-core/src/domain/report.rs

// Structured report tree. Processors emit these blocks; the renderers
// (HTML / PDF / JSON) decide presentation. Keeping the aggregation side free
// of presentation strings is what lets one section feed a JSON endpoint, an
// HTML fragment and the PDF at the same time.

use serde::Serialize;

/// A data table, already formatted (Nepali digits etc.) but not yet numbered.
/// Numbers like "तालिका ३.२" are assigned positionally during assembly.
#[derive(Debug, Clone, Serialize)]
pub struct TableBlock {
    pub caption_ne: String,
    pub caption_en: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Filled by report assembly ("3.1", "3.2", ...).
    pub number: Option<String>,
}

/// Reference to a generated chart artifact.
#[derive(Debug, Clone, Serialize)]
pub struct FigureBlock {
    /// Deterministic chart key (domain + section + kind).
    pub key: String,
    /// Path of the SVG on disk, relative to the media root.
    pub path: String,
    pub caption_ne: String,
    pub number: Option<String>,
}

/// One fully processed report section, ready for assembly.
#[derive(Debug, Clone, Serialize)]
pub struct PdfSection {
    pub key: String,
    pub title_en: String,
    pub title_ne: String,
    /// Narrative paragraphs in Nepali (dominant category, ratio commentary).
    pub narrative: Vec<String>,
    pub tables: Vec<TableBlock>,
    pub figures: Vec<FigureBlock>,
    /// Decimal section number, assigned positionally ("3.1").
    pub number: Option<String>,
}

impl PdfSection {
    pub fn new(key: impl Into<String>, title_en: impl Into<String>, title_ne: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title_en: title_en.into(),
            title_ne: title_ne.into(),
            narrative: Vec::new(),
            tables: Vec::new(),
            figures: Vec::new(),
            number: None,
        }
    }
}

/// Table-of-contents entry with the running counters at that point.
#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    pub number: String,
    pub title_ne: String,
    pub title_en: String,
    pub table_count: usize,
    pub figure_count: usize,
}

/// The assembled full report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub municipality_ne: String,
    pub municipality_en: String,
    pub generated_on: String,
    pub toc: Vec<TocEntry>,
    pub sections: Vec<PdfSection>,
    pub total_tables: usize,
    pub total_figures: usize,
}
