//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use super::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{Result, SlidenavError};

/// Initialize logging system based on configuration
///
/// Without a log file, CLI mode logs to stderr and TUI mode discards log
/// output, since anything written to the terminal would tear the presenter's
/// alternate screen.
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());
    let writer = make_writer(config, log_file, mode)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        SlidenavError::config(format!("Invalid logging.level '{}': {}", config.level, e))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none() && mode == RunMode::Cli);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| SlidenavError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

fn make_writer(
    config: &LoggingConfig,
    log_file: Option<&str>,
    mode: RunMode,
) -> Result<Box<dyn Write + Send + Sync>> {
    let Some(log_file) = log_file else {
        return Ok(match mode {
            RunMode::Cli => Box::new(std::io::stderr()),
            RunMode::Tui => Box::new(std::io::sink()),
        });
    };

    if config.enable_rotation {
        // 按天滚动日志文件
        let path = Path::new(log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("slidenav.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| {
                SlidenavError::file_operation(format!(
                    "Failed to create rolling log appender in {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        Ok(Box::new(appender))
    } else {
        // 不滚动，追加写入
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                SlidenavError::file_operation(format!(
                    "Failed to open log file {}: {}",
                    log_file, e
                ))
            })?;
        Ok(Box::new(file))
    }
}
