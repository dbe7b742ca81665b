// palika/src/commands/report.rs

use std::path::Path;

use anyhow::{Context, Result};

use palika_core::application::{DomainManager, ReportBuilder};
use palika_core::infrastructure::charts::ChartService;
use palika_core::infrastructure::render::{PdfRenderer, ReportRenderer};

use crate::commands::AppContext;

/// Assemble the full report into `out/`: charts under `out/charts/`,
/// report.html next to them (so the relative <img> paths resolve), and
/// optionally report.pdf.
pub async fn run(project_dir: &Path, out: &Path, pdf: bool) -> Result<()> {
    let ctx = AppContext::open(project_dir).await?;
    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output dir {}", out.display()))?;

    let manager = DomainManager::with_all_sections();
    let charts = ChartService::new(out, ctx.repo.clone());

    let doc = ReportBuilder::default()
        .assemble(
            &manager,
            ctx.repo.as_ref(),
            &charts,
            &ctx.settings.municipality,
        )
        .await?;

    if doc.sections.is_empty() {
        anyhow::bail!("No seeded sections: nothing to report. Run `palika seed` first.");
    }

    let renderer = ReportRenderer::new()?;
    let html = renderer.render_report(&doc)?;

    let html_path = out.join("report.html");
    std::fs::write(&html_path, &html)?;
    println!("📄 Report written to {}", html_path.display());
    println!(
        "   {} section(s), {} table(s), {} figure(s).",
        doc.sections.len(),
        doc.total_tables,
        doc.total_figures
    );

    if pdf {
        let engine = PdfRenderer::new(&ctx.settings.pdf_engine);
        let bytes = engine.render(&html)?;
        let pdf_path = out.join("report.pdf");
        std::fs::write(&pdf_path, bytes)?;
        println!("📄 PDF written to {}", pdf_path.display());
    }

    Ok(())
}
