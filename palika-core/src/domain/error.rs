// palika-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("No data recorded for section '{0}'")]
    #[diagnostic(
        code(palika::domain::no_data),
        help("Run `palika seed` or enter the section data through the admin flow.")
    )]
    NoData(String),

    #[error("Unknown category '{value}' for domain '{domain}'")]
    #[diagnostic(
        code(palika::domain::unknown_category),
        help("Category enumerators are a fixed closed set per domain.")
    )]
    UnknownCategory { domain: String, value: String },

    #[error("Ward {ward} is outside the municipality range 1..={max}")]
    #[diagnostic(code(palika::domain::invalid_ward))]
    InvalidWard { ward: u32, max: u32 },

    #[error("Section '{0}' is not registered with any manager")]
    #[diagnostic(code(palika::domain::unregistered_section))]
    UnregisteredSection(String),
}
