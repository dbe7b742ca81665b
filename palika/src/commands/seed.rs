// palika/src/commands/seed.rs

use std::path::Path;

use anyhow::Result;
use comfy_table::Table;

use palika_core::application::{seed_all, seed_domain};

use crate::commands::AppContext;

pub async fn run(project_dir: &Path, domain: Option<String>) -> Result<()> {
    let ctx = AppContext::open(project_dir).await?;
    let municipality = &ctx.settings.municipality;

    let report = match domain {
        Some(d) => seed_domain(ctx.repo.as_ref(), municipality, &d).await?,
        None => seed_all(ctx.repo.as_ref(), municipality).await?,
    };

    let mut table = Table::new();
    table.set_header(vec!["Section", "Rows"]);
    for entry in &report.entries {
        table.add_row(vec![entry.section.clone(), entry.rows.to_string()]);
    }
    println!("{table}");
    println!("✨ Seeded {} section(s).", report.entries.len());
    Ok(())
}
