// palika/src/commands/mod.rs

pub mod admin;
pub mod charts;
pub mod inspect;
pub mod report;
pub mod seed;
pub mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use palika_core::infrastructure::adapters::DuckDbRepository;
use palika_core::infrastructure::config::{Settings, load_settings};
use palika_core::ports::repository::Repository;

/// Everything a command needs: settings plus an opened, schema-initialized
/// repository.
pub struct AppContext {
    pub settings: Settings,
    pub repo: Arc<DuckDbRepository>,
}

impl AppContext {
    pub async fn open(project_dir: &Path) -> Result<Self> {
        let settings = load_settings(project_dir)?;

        let db_path = resolve(project_dir, &settings.db_path);
        let repo = Arc::new(DuckDbRepository::new(&db_path)?);
        repo.init_schema().await?;

        Ok(Self { settings, repo })
    }

    /// Media root resolved against the project directory.
    pub fn media_root(&self, project_dir: &Path) -> PathBuf {
        PathBuf::from(resolve(project_dir, &self.settings.media_root))
    }
}

/// Relative paths in settings are anchored at the project directory;
/// absolute paths and ":memory:" pass through.
fn resolve(project_dir: &Path, path: &str) -> String {
    if path == ":memory:" || Path::new(path).is_absolute() {
        return path.to_string();
    }
    project_dir.join(path).to_string_lossy().into_owned()
}
