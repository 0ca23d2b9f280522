//! SENIPY arcade - unified CLI
//!
//! Play the mini-games, save the app download, or list the catalogue.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use senipy::{Catalogue, GameKind, PseudoDownload, SenipyConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(cli.config, game).await,
        Command::Download { out } => run_download(cli.config, out),
        Command::Games { json } => run_games(json),
    }
}

/// Run the arcade TUI
async fn run_play(config_path: PathBuf, game: Option<GameKind>) -> Result<()> {
    let config = SenipyConfig::load(&config_path)?;
    senipy::run_tui(config, game).await
}

/// Save the pseudo-download
#[instrument(skip_all)]
fn run_download(config_path: PathBuf, out: Option<PathBuf>) -> Result<()> {
    init_stderr_tracing();

    let config = SenipyConfig::load(&config_path)?;
    let dir = out.unwrap_or(config.download.dir);
    info!(dir = %dir.display(), "Saving download");

    let path = PseudoDownload::default().save_to(&dir)?;
    println!("Saved {}", path.display());
    Ok(())
}

/// Print the game catalogue
#[instrument]
fn run_games(json: bool) -> Result<()> {
    init_stderr_tracing();

    let catalogue = Catalogue::new();
    if json {
        println!("{}", serde_json::to_string_pretty(catalogue.entries())?);
    } else {
        for entry in catalogue.entries() {
            println!(
                "{:<8} {} {:<20} {}",
                entry.kind.to_string(),
                entry.kind.icon(),
                entry.name,
                entry.description
            );
        }
    }
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
