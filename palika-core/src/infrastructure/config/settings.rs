// palika-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::profile::Municipality;
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub municipality: Municipality,

    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory for generated artifacts (charts, exported reports).
    #[serde(default = "default_media_root")]
    pub media_root: String,

    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default)]
    pub allowed_hosts: Vec<String>,

    /// External HTML-to-PDF engine, invoked as a child process.
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: String,

    /// "development" (default) or "production".
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Cache/broker URL; only read under the production profile.
    #[serde(default)]
    pub cache_url: Option<String>,
}

fn default_db_path() -> String {
    "palika_db.duckdb".to_string()
}
fn default_media_root() -> String {
    "media".to_string()
}
fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}
fn default_pdf_engine() -> String {
    "weasyprint".to_string()
}
fn default_profile() -> String {
    "development".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            municipality: Municipality {
                name_en: "Sundar Municipality".to_string(),
                name_ne: "सुन्दर नगरपालिका".to_string(),
                ward_count: 12,
            },
            db_path: default_db_path(),
            media_root: default_media_root(),
            bind_addr: default_bind_addr(),
            allowed_hosts: Vec::new(),
            pdf_engine: default_pdf_engine(),
            profile: default_profile(),
            cache_url: None,
        }
    }
}

// --- LOADER ---

/// Load settings from the project directory, then layer environment
/// overrides on top. A missing config file falls back to defaults so the
/// seeding commands can bootstrap an empty project directory.
#[instrument(skip(project_dir))]
pub fn load_settings(project_dir: &Path) -> Result<Settings, InfrastructureError> {
    let mut settings = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading project settings");
            let content = fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            warn!(dir = ?project_dir, "No palika.yaml found, using default settings");
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings);

    if settings.profile == "production" && settings.cache_url.is_none() {
        warn!("Production profile without PALIKA_CACHE_URL: running uncached");
    }

    Ok(settings)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    let candidates = ["palika.yaml", "palika_project.yaml"];
    candidates.iter().map(|f| root.join(f)).find(|p| p.exists())
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("PALIKA_DB_PATH") {
        info!(old = ?settings.db_path, new = ?val, "Overriding db path via ENV");
        settings.db_path = val;
    }
    if let Ok(val) = std::env::var("PALIKA_MEDIA_ROOT") {
        info!(old = ?settings.media_root, new = ?val, "Overriding media root via ENV");
        settings.media_root = val;
    }
    if let Ok(val) = std::env::var("PALIKA_BIND_ADDR") {
        settings.bind_addr = val;
    }
    if let Ok(val) = std::env::var("PALIKA_ALLOWED_HOSTS") {
        settings.allowed_hosts = val.split(',').map(|s| s.trim().to_string()).collect();
    }
    if let Ok(val) = std::env::var("PALIKA_PDF_ENGINE") {
        settings.pdf_engine = val;
    }
    if let Ok(val) = std::env::var("PALIKA_PROFILE") {
        info!(old = ?settings.profile, new = ?val, "Overriding profile via ENV");
        settings.profile = val;
    }
    if let Ok(val) = std::env::var("PALIKA_CACHE_URL") {
        settings.cache_url = Some(val);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config_file() -> Result<()> {
        let dir = tempdir()?;
        let settings = load_settings(dir.path())?;
        assert_eq!(settings.municipality.ward_count, 12);
        assert_eq!(settings.pdf_engine, "weasyprint");
        assert_eq!(settings.profile, "development");
        Ok(())
    }

    #[test]
    fn test_yaml_config_is_loaded() -> Result<()> {
        let dir = tempdir()?;
        let yaml = r#"
municipality:
  name_en: "Example Municipality"
  name_ne: "उदाहरण नगरपालिका"
  ward_count: 9
db_path: "custom.duckdb"
"#;
        fs::write(dir.path().join("palika.yaml"), yaml)?;

        let settings = load_settings(dir.path())?;
        assert_eq!(settings.municipality.name_en, "Example Municipality");
        assert_eq!(settings.municipality.ward_count, 9);
        assert_eq!(settings.db_path, "custom.duckdb");
        // Unspecified fields take defaults
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        Ok(())
    }

    #[test]
    fn test_malformed_yaml_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("palika.yaml"), "municipality: [not, a, map]")?;
        assert!(load_settings(dir.path()).is_err());
        Ok(())
    }
}
