// palika/src/main.rs

use clap::Parser;

use palika::cli::{Cli, Commands};
use palika::commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug palika serve ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: HTTP SERVER ---
        Commands::Serve { project_dir } => {
            if let Err(e) = commands::serve::run(&project_dir).await {
                eprintln!("💥 Server failed: {e}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: SAMPLE DATA SEEDING ---
        Commands::Seed {
            project_dir,
            domain,
        } => {
            if let Err(e) = commands::seed::run(&project_dir, domain).await {
                eprintln!("❌ Seed failed: {e}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: ADMIN BOOTSTRAP ---
        Commands::CreateAdmin {
            project_dir,
            username,
        } => {
            if let Err(e) = commands::admin::run(&project_dir, &username).await {
                eprintln!("❌ Admin creation failed: {e}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: CHART REGISTRY CLEANUP ---
        Commands::PruneCharts { project_dir } => {
            if let Err(e) = commands::charts::prune(&project_dir).await {
                eprintln!("❌ Prune failed: {e}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: REPORT EXPORT ---
        Commands::Report {
            project_dir,
            out,
            pdf,
        } => {
            let start = std::time::Instant::now();
            match commands::report::run(&project_dir, &out, pdf).await {
                Ok(()) => println!("✨ Done in {:.2?}", start.elapsed()),
                Err(e) => {
                    eprintln!("❌ Report generation failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        // --- USE CASE: SECTION INSPECTION ---
        Commands::Inspect {
            project_dir,
            section,
        } => {
            if let Err(e) = commands::inspect::run(&project_dir, &section).await {
                eprintln!("❌ Inspect failed: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
