//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod slides;
mod step;

pub use config_gen::config_generate;
pub use slides::list_slides;
pub use step::{StepRecord, StepReport, run_steps, step_keys};
