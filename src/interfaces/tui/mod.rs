//! Terminal User Interface (TUI) module
//!
//! Presents a deck full-screen and drives it from the keyboard.

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, CurrentScreen};
pub use event_handler::{handle_key_event, nav_key_from};

use crate::config::PresenterConfig;
use crate::errors::{Result, SlidenavError};
use ui::ui;

/// Run the presenter until the user quits
pub fn run_tui(deck_path: &str, fragment: Option<&str>, presenter: PresenterConfig) -> Result<()> {
    // 先加载 deck，出错时终端尚未切换
    let mut app = App::new(deck_path, fragment, presenter)?;

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    res.map_err(terminal_error)?;
    println!("Stopped at {}", app.href());
    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stderr>>, app: &mut App) -> io::Result<()> {
    let poll_interval = Duration::from_millis(app.presenter.poll_interval_ms);

    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(poll_interval)? {
            // 空闲时检查 deck 文件是否被修改
            app.refresh_deck();
            continue;
        }

        if let Event::Key(key) = event::read()?
            && handle_key_event(app, key)
        {
            return Ok(());
        }
    }
}

fn terminal_error<E: std::fmt::Display>(err: E) -> SlidenavError {
    SlidenavError::terminal(err.to_string())
}
