//! `tag-sync` binary: run the full pipeline against a catalog root.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tag_sync::SyncPaths;

/// Normalize card tags, reconcile registries, and regenerate artifacts.
#[derive(Debug, Parser)]
#[command(name = "tag-sync", version)]
struct Args {
    /// Catalog root containing the json/ and src/ layout.
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tag-sync: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let paths = SyncPaths::new(&args.root);
    tag_sync::run(&paths)?;
    Ok(())
}
