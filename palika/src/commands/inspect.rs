// palika/src/commands/inspect.rs

use std::path::Path;

use anyhow::{Result, bail};
use comfy_table::Table;

use palika_core::application::{DomainManager, SectionProcessor};

use crate::commands::AppContext;

/// Print one section's municipality aggregates as a terminal table.
pub async fn run(project_dir: &Path, section: &str) -> Result<()> {
    let ctx = AppContext::open(project_dir).await?;
    let manager = DomainManager::with_all_sections();

    let Some(processor) = manager.get(section) else {
        bail!(
            "Unknown section '{section}'. Available: {}",
            manager.get_available_categories().join(", ")
        );
    };

    let data = processor.get_data(ctx.repo.as_ref()).await?;

    let mut table = Table::new();
    match data.get("municipality_data").and_then(|v| v.as_array()) {
        Some(rows) => {
            table.set_header(vec!["Category", "Count", "Percent"]);
            for row in rows {
                table.add_row(vec![
                    row["label_en"].as_str().unwrap_or("?").to_string(),
                    row["count"].to_string(),
                    format!("{:.2}", row["percentage"].as_f64().unwrap_or(0.0)),
                ]);
            }
        }
        None => {
            // Singleton sections: flat key/value dump.
            table.set_header(vec!["Field", "Value"]);
            if let Some(map) = data.as_object() {
                for (k, v) in map {
                    table.add_row(vec![k.clone(), v.to_string()]);
                }
            }
        }
    }

    println!("{table}");
    Ok(())
}
