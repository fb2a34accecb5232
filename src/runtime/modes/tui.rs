//! TUI mode

use crate::config::get_config;
use crate::errors::Result;

/// Present `deck` with the configured presenter settings
pub fn run_tui(deck: &str, fragment: Option<&str>) -> Result<()> {
    let presenter = get_config().presenter.clone();
    crate::interfaces::tui::run_tui(deck, fragment, presenter)
}
