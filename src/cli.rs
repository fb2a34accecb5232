//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for slidenav using clap's derive macros.

use clap::{Parser, Subcommand};

/// Slidenav - keyboard-driven slide navigation
#[derive(Parser)]
#[command(name = "slidenav")]
#[command(version)]
#[command(about = "Keyboard-driven navigation for section-based slide decks", long_about = None)]
pub struct Cli {
    /// Configuration file (default: slidenav.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Present a deck in the terminal
    #[cfg(feature = "tui")]
    Present {
        /// Deck file containing <section id="slideN"> blocks
        deck: String,

        /// Fragment to open at (e.g. slide3 or #slide3)
        #[arg(long, short = 'f')]
        fragment: Option<String>,
    },

    /// Feed key presses to the navigator and print the resulting fragment
    ///
    /// Keys use DOM KeyboardEvent.code names: Space, ArrowRight, ArrowLeft.
    /// Any other name is accepted and ignored by the navigator.
    Step {
        /// Deck file
        deck: String,

        /// Key codes, applied in order
        keys: Vec<String>,

        /// Fragment to start from (default: none, so load moves to slide0)
        #[arg(long, short = 'f')]
        fragment: Option<String>,

        /// Print every transition
        #[arg(long)]
        trace: bool,

        /// Output as JSON
        #[arg(long, conflicts_with = "trace")]
        json: bool,
    },

    /// List the sections of a deck
    Slides {
        /// Deck file
        deck: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: slidenav.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Whether this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        #[cfg(feature = "tui")]
        if matches!(self, Commands::Present { .. }) {
            return true;
        }
        false
    }
}
