//! Slidenav - keyboard-driven slide navigation
//!
//! Moves between the `<section id="slideN">` blocks of a presentation by
//! rewriting its navigation fragment, one slide per key press.
//!
//! # Features
//! - **tui**: Terminal presenter, the `present` command (default)
//!
//! # Architecture
//! - `deck`: Section markup and the document structure the navigator reads
//! - `fragment`: The navigation fragment as injected session state
//! - `navigator`: Key classification and slide transitions
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod deck;
pub mod errors;
pub mod fragment;
pub mod interfaces;
pub mod navigator;
pub mod runtime;
pub mod system;
