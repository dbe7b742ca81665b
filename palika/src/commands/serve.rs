// palika/src/commands/serve.rs

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use palika_core::application::DomainManager;
use palika_core::infrastructure::charts::ChartService;
use palika_core::infrastructure::render::{PdfRenderer, ReportRenderer};

use crate::commands::AppContext;
use crate::http::{AppState, build_router};

pub async fn run(project_dir: &Path) -> Result<()> {
    let ctx = AppContext::open(project_dir).await?;
    let media_root = ctx.media_root(project_dir);

    let state = AppState {
        repo: ctx.repo.clone(),
        manager: Arc::new(DomainManager::with_all_sections()),
        charts: Arc::new(ChartService::new(media_root, ctx.repo.clone())),
        renderer: Arc::new(ReportRenderer::new()?),
        pdf: Arc::new(PdfRenderer::new(&ctx.settings.pdf_engine)),
        municipality: ctx.settings.municipality.clone(),
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&ctx.settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", ctx.settings.bind_addr))?;

    info!(
        addr = %ctx.settings.bind_addr,
        profile = %ctx.settings.profile,
        allowed_hosts = ?ctx.settings.allowed_hosts,
        "Serving municipal profile API"
    );

    axum::serve(listener, router)
        .await
        .context("HTTP server crashed")?;
    Ok(())
}
