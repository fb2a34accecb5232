//! CLI mode

use crate::cli::Commands;
use crate::interfaces::cli::{CliError, run_cli_command};

/// Run one CLI command to completion
pub fn run_cli(command: Commands) -> Result<(), CliError> {
    run_cli_command(command)
}
