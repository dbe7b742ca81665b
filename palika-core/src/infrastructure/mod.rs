// palika-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod charts;
pub mod config;
pub mod error;
pub mod fs;
pub mod render;
