//! Application lifecycle
//!
//! Loads configuration, sets up logging and the panic hook for the selected
//! mode, then hands the parsed command to that mode.

pub mod modes;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{get_config, init_config};
use crate::system::{init_logging, install_panic_hook};

pub fn run(cli: Cli) -> Result<()> {
    init_config(cli.config.as_deref());
    let config = get_config();

    let mode = modes::detect_mode(&cli.command);
    install_panic_hook(mode);
    let _guard = init_logging(&config.logging, mode).context("Failed to initialize logging")?;
    debug!("Starting in {:?} mode", mode);

    #[cfg(feature = "tui")]
    if let crate::cli::Commands::Present { deck, fragment } = &cli.command {
        return modes::run_tui(deck, fragment.as_deref())
            .with_context(|| format!("Failed to present {}", deck));
    }

    modes::run_cli(cli.command).map_err(|e| anyhow::anyhow!(e.format_colored()))
}
