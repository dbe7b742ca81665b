// palika/src/commands/charts.rs

use std::path::Path;

use anyhow::Result;

use palika_core::infrastructure::charts::ChartService;

use crate::commands::AppContext;

pub async fn prune(project_dir: &Path) -> Result<()> {
    let ctx = AppContext::open(project_dir).await?;
    let service = ChartService::new(ctx.media_root(project_dir), ctx.repo.clone());

    let removed = service.cleanup_missing_files().await?;
    println!("🧹 Removed {removed} orphaned chart entr(ies).");
    Ok(())
}
