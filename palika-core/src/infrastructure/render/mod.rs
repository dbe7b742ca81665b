// palika-core/src/infrastructure/render/mod.rs

pub mod jinja;
pub mod pdf;

pub use jinja::ReportRenderer;
pub use pdf::PdfRenderer;
