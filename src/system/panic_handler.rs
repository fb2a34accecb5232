//! Panic handler module
//!
//! Writes every panic to crash.log. In TUI mode the terminal is restored
//! first so the message is readable.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Utc;

use super::RunMode;

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if mode == RunMode::Tui {
            restore_terminal();
        }

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        match mode {
            RunMode::Cli => display_cli_panic(&message, &location),
            RunMode::Tui => display_simple_panic(&message),
        }
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use ratatui::crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

/// CLI mode: colored reason and location
fn display_cli_panic(message: &str, location: &str) {
    use colored::Colorize;

    eprintln!();
    eprintln!("{}", "PANIC".red().bold());
    eprintln!("{} {}", "Reason:".yellow().bold(), message.white());
    eprintln!("{} {}", "Location:".yellow().bold(), location.white());
    eprintln!("{}", "Details saved to crash.log".cyan());
    eprintln!();
}

/// TUI mode: Display simple error message
fn display_simple_panic(message: &str) {
    eprintln!();
    eprintln!("Program panicked: {}", message);
    eprintln!("Details saved to crash.log, please check the log file");
    eprintln!();
}

/// Write crash log
fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
