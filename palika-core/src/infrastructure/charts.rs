// palika-core/src/infrastructure/charts.rs

// Chart artifacts for the PDF/HTML report. Charts are plain SVG written
// under `<media_root>/charts/`, keyed deterministically by section + kind so
// regeneration overwrites the previous artifact instead of accumulating
// files. Every write is mirrored by a registry row; the prune command drops
// registry rows whose backing file has gone missing.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::aggregate::CategoryAggregate;
use crate::domain::report::FigureBlock;
use crate::error::PalikaError;
use crate::infrastructure::fs::{atomic_write, ensure_dir};
use crate::ports::repository::{ChartEntry, Repository};

const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
        }
    }
}

pub struct ChartService {
    media_root: PathBuf,
    repo: Arc<dyn Repository>,
}

impl ChartService {
    pub fn new(media_root: impl Into<PathBuf>, repo: Arc<dyn Repository>) -> Self {
        Self {
            media_root: media_root.into(),
            repo,
        }
    }

    /// Deterministic artifact key: `{domain}_{section}_{kind}`.
    fn chart_key(section_key: &str, kind: ChartKind) -> String {
        format!("{}_{}", section_key.replace('/', "_"), kind.as_str())
    }

    /// Render one chart for a section's municipality data, overwrite the
    /// artifact on disk and upsert its registry row. Returns the figure
    /// reference the report embeds.
    pub async fn generate(
        &self,
        section_key: &str,
        kind: ChartKind,
        caption_ne: &str,
        data: &[CategoryAggregate],
    ) -> Result<FigureBlock, PalikaError> {
        let key = Self::chart_key(section_key, kind);
        let rel_path = format!("charts/{key}.svg");
        let abs_path = self.media_root.join(&rel_path);

        let svg = match kind {
            ChartKind::Pie => render_pie(data),
            ChartKind::Bar => render_bar(data),
        };

        if let Some(parent) = abs_path.parent() {
            ensure_dir(parent)?;
        }
        atomic_write(&abs_path, &svg)?;
        debug!(key = %key, path = %abs_path.display(), "Chart written");

        self.repo
            .record_chart(&ChartEntry {
                key: key.clone(),
                path: rel_path.clone(),
                generated_at: Utc::now().to_rfc3339(),
            })
            .await?;

        Ok(FigureBlock {
            key,
            path: rel_path,
            caption_ne: caption_ne.to_string(),
            number: None,
        })
    }

    /// Remove registry rows whose backing file no longer exists on disk.
    /// Rows with a live file are left untouched. Returns how many were
    /// dropped.
    pub async fn cleanup_missing_files(&self) -> Result<usize, PalikaError> {
        let mut removed = 0;
        for entry in self.repo.list_charts().await? {
            if !self.media_root.join(&entry.path).exists() {
                self.repo.delete_chart(&entry.key).await?;
                removed += 1;
            }
        }
        if removed > 0 {
            info!(removed, "Pruned orphaned chart registry entries");
        }
        Ok(removed)
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }
}

// --- SVG RENDERING ---
// Hand-assembled SVG keeps the artifact deterministic for a given input,
// which is what makes "last writer wins" acceptable on concurrent writes.

fn render_pie(data: &[CategoryAggregate]) -> String {
    let (cx, cy, r) = (200.0_f64, 160.0_f64, 120.0_f64);
    let total: u64 = data.iter().map(|d| d.count).sum();

    let mut body = String::new();
    if total == 0 {
        body.push_str(&format!(
            r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="#ccc"/>"##
        ));
    } else {
        let mut angle = -std::f64::consts::FRAC_PI_2;
        for (i, slice) in data.iter().enumerate() {
            if slice.count == 0 {
                continue;
            }
            let sweep = slice.count as f64 / total as f64 * std::f64::consts::TAU;
            let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
            // A full-circle slice would collapse the arc onto its own start
            // point; pull the endpoint back a hair so it still draws.
            let end = angle + sweep.min(std::f64::consts::TAU - 1e-4);
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large = i32::from(sweep > std::f64::consts::PI);
            let color = PALETTE[i % PALETTE.len()];
            body.push_str(&format!(
                r#"<path d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} Z" fill="{color}"/>"#,
            ));
            angle = end;
        }
    }

    let legend = render_legend(data, 340.0, 40.0);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="560" height="320" viewBox="0 0 560 320">{body}{legend}</svg>"#
    )
}

fn render_bar(data: &[CategoryAggregate]) -> String {
    let (width, height, pad) = (560.0_f64, 320.0_f64, 40.0_f64);
    let max = data.iter().map(|d| d.count).max().unwrap_or(0).max(1) as f64;
    let plot_w = width - 2.0 * pad;
    let plot_h = height - 2.0 * pad;
    let slot = plot_w / data.len().max(1) as f64;
    let bar_w = slot * 0.6;

    let mut body = String::new();
    for (i, item) in data.iter().enumerate() {
        let h = item.count as f64 / max * plot_h;
        let x = pad + i as f64 * slot + (slot - bar_w) / 2.0;
        let y = height - pad - h;
        let color = PALETTE[i % PALETTE.len()];
        body.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_w:.2}" height="{h:.2}" fill="{color}"/>"#,
        ));
        body.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="10" text-anchor="middle">{}</text>"#,
            x + bar_w / 2.0,
            height - pad + 14.0,
            item.label_en,
        ));
    }
    // Baseline
    body.push_str(&format!(
        r##"<line x1="{pad}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#333"/>"##,
        height - pad,
        width - pad,
        height - pad,
    ));

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">{body}</svg>"#
    )
}

fn render_legend(data: &[CategoryAggregate], x: f64, y0: f64) -> String {
    let mut out = String::new();
    for (i, item) in data.iter().enumerate() {
        let y = y0 + i as f64 * 22.0;
        let color = PALETTE[i % PALETTE.len()];
        out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="14" height="14" fill="{color}"/>"#
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12">{} ({:.1}%)</text>"#,
            x + 20.0,
            y + 11.0,
            item.label_en,
            item.percentage,
        ));
    }
    out
}
