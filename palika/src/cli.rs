// palika/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palika")]
#[command(about = "Municipal Digital Profile & Reporting Engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🌐 Runs the HTTP server (JSON API + HTML/PDF report endpoints)
    Serve {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🌱 Seeds sample data (idempotent upsert keyed by ward + category)
    Seed {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Seed only one domain (ex: "economics"); default is all
        #[arg(long, short)]
        domain: Option<String>,
    },

    /// 👤 Creates an admin account and prints its access token once
    CreateAdmin {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long, short)]
        username: String,
    },

    /// 🧹 Prunes chart-registry entries whose backing file is missing
    PruneCharts {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 📄 Writes the assembled report (HTML, optionally PDF) to disk
    Report {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Output directory for report.html and chart artifacts
        #[arg(long, default_value = "report_out")]
        out: PathBuf,

        /// Also convert to PDF via the configured engine
        #[arg(long)]
        pdf: bool,
    },

    /// 🔍 Prints one section's municipality table
    Inspect {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Section key (ex: "economics/wall-material")
        #[arg(long, short)]
        section: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_serve_defaults() -> Result<()> {
        let args = Cli::parse_from(["palika", "serve"]);
        match args.command {
            Commands::Serve { project_dir } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                Ok(())
            }
            _ => bail!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_seed_domain() -> Result<()> {
        let args = Cli::parse_from(["palika", "seed", "--domain", "economics"]);
        match args.command {
            Commands::Seed { domain, .. } => {
                assert_eq!(domain, Some("economics".to_string()));
                Ok(())
            }
            _ => bail!("Expected Seed command"),
        }
    }

    #[test]
    fn test_cli_parse_report_pdf_flag() -> Result<()> {
        let args = Cli::parse_from(["palika", "report", "--pdf", "--out", "/tmp/out"]);
        match args.command {
            Commands::Report { pdf, out, .. } => {
                assert!(pdf);
                assert_eq!(out.to_string_lossy(), "/tmp/out");
                Ok(())
            }
            _ => bail!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_inspect() -> Result<()> {
        let args = Cli::parse_from(["palika", "inspect", "--section", "social/literacy"]);
        match args.command {
            Commands::Inspect { section, .. } => {
                assert_eq!(section, "social/literacy");
                Ok(())
            }
            _ => bail!("Expected Inspect command"),
        }
    }
}
