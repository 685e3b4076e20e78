use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::core::error::Result;

#[derive(Debug, Parser)]
#[command(name = "guessterm")]
#[command(about = "Guess the number in your terminal", version)]
pub struct Cli {
    /// Settings file (JSON) with tiers and paths
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where best scores are kept
    #[arg(long, global = true, value_name = "FILE", env = "GUESSTERM_SCORES_FILE")]
    pub scores_file: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, global = true, value_name = "FILE", env = "GUESSTERM_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Play the game (default)
    Play {
        /// Difficulty tier selected at launch
        #[arg(short, long)]
        difficulty: Option<String>,
    },
    /// Show the best score for each tier
    Scores,
    /// List the configured difficulty tiers
    Tiers,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { difficulty: None })
    }

    /// Settings file (or defaults) with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(path) = &self.scores_file {
            settings.scores_file = path.clone();
        }
        if let Some(path) = &self.log_file {
            settings.log_file = path.clone();
        }
        Ok(settings)
    }
}
