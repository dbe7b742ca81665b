// palika-core/src/application/mod.rs

pub mod manager;
pub mod processors;
pub mod report;
pub mod seed;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use palika_core::application::{DomainManager, ReportBuilder, seed_all};`
// sans avoir à connaître la structure interne des fichiers.

pub use manager::DomainManager;
pub use processors::{CategoricalSection, SectionProcessor, SummarySection};
pub use report::ReportBuilder;
pub use seed::{SeedReport, seed_all, seed_domain, store_ward_counts};
