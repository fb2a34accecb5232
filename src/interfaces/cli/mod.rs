//! CLI interface module
//!
//! This module provides command-line interface functionality for slidenav.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use commands::{config_generate, list_slides, step_keys};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    LoadError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::LoadError(msg) => format!("Load error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::LoadError(msg) => {
                format!("{} {}", "Load error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::SlidenavError> for CliError {
    fn from(err: crate::errors::SlidenavError) -> Self {
        CliError::LoadError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Step {
            deck,
            keys,
            fragment,
            trace,
            json,
        } => step_keys(deck, keys, fragment, trace, json),

        Commands::Slides { deck, json } => list_slides(deck, json),

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Present { .. } => Err(CliError::CommandError(
            "present runs in TUI mode".to_string(),
        )),
    }
}
