//! Mode routing
//!
//! - CLI mode (one-shot commands)
//! - TUI mode (terminal presenter)

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::RunMode;

/// Detect which mode a command runs in
pub fn detect_mode(command: &Commands) -> RunMode {
    if command.is_interactive() {
        RunMode::Tui
    } else {
        RunMode::Cli
    }
}
