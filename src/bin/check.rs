// Build-time checks for the course search asset.
// Run with: cargo run --bin catalog_check -- check data/search_index.json
use anyhow::Context;
use catalog_core::persistence::{load_index, save_index};
use catalog_core::SearchIndex;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate and normalize course search assets.
#[derive(Debug, Parser)]
#[command(name = "catalog_check", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load an asset and report how many courses it holds.
    Check { asset: PathBuf },
    /// Load an asset and rewrite it in canonical form.
    Normalize { input: PathBuf, output: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_core=info,catalog_check=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Check { asset } => {
            let index = load_checked(&asset)?;
            let without_context = index
                .entries()
                .iter()
                .filter(|e| e.course_context.is_none())
                .count();
            println!(
                "{}: {} courses, {} without context",
                asset.display(),
                index.len(),
                without_context
            );
        }
        Command::Normalize { input, output } => {
            let index = load_checked(&input)?;
            save_index(&index, &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(
                input = %input.display(),
                output = %output.display(),
                courses = index.len(),
                "Asset normalized"
            );
        }
    }

    Ok(())
}

fn load_checked(path: &Path) -> anyhow::Result<SearchIndex> {
    load_index(path).with_context(|| format!("{} is not a valid search index", path.display()))
}
