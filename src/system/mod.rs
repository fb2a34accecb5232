//! System-level modules
//!
//! - Logging initialisation
//! - Panic handling

pub mod logging;
pub mod panic_handler;

pub use logging::init_logging;
pub use panic_handler::install_panic_hook;

/// Running mode, decides where logs and panics go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}
