//! Command-line interface for senipy.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use senipy::GameKind;

/// SENIPY arcade - brain-training mini-games in the terminal
#[derive(Parser, Debug)]
#[command(name = "senipy")]
#[command(about = "Brain-training mini-games and demo flows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = senipy::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the arcade TUI
    Play {
        /// Jump straight into a game (memory, word, number, pattern, trivia, brain)
        #[arg(short, long)]
        game: Option<GameKind>,
    },

    /// Save the app download into a directory
    Download {
        /// Output directory (overrides the config file)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the game catalogue
    Games {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
