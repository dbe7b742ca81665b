// palika-core/src/domain/mod.rs

pub mod aggregate;
pub mod error;
pub mod locale;
pub mod profile;
pub mod report;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
