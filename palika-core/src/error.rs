// palika-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalikaError {
    // --- ERREURS DU DOMAINE (No data, catégories, wards) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, DB, Templates, PDF) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for PalikaError {
    fn from(err: std::io::Error) -> Self {
        PalikaError::Infrastructure(InfrastructureError::Io(err))
    }
}

// Shortcut for the `?` operator on duckdb calls inside the adapter.
impl From<duckdb::Error> for PalikaError {
    fn from(err: duckdb::Error) -> Self {
        PalikaError::Infrastructure(err.into())
    }
}

impl PalikaError {
    /// True when the error is the "requested data does not exist" case.
    /// Views map this to a 404 payload; everything else stays a 500.
    pub fn is_no_data(&self) -> bool {
        matches!(self, PalikaError::Domain(DomainError::NoData(_)))
    }
}
