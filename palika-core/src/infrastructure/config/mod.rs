// palika-core/src/infrastructure/config/mod.rs

pub mod settings;

pub use settings::{Settings, load_settings};
