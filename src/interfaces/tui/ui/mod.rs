// UI submodules
mod common;
mod help;
mod slide_view;
pub mod widgets;

pub use common::{draw_footer, draw_progress, draw_status_bar, draw_title_bar};
pub use help::draw_help_screen;
pub use slide_view::draw_slide;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let show_progress = app.presenter.show_progress;
    let show_footer = app.presenter.show_footer;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                   // Title
            Constraint::Min(5),                                      // Slide
            Constraint::Length(if show_progress { 1 } else { 0 }), // Progress
            Constraint::Length(3),                                   // Status
            Constraint::Length(if show_footer { 1 } else { 0 }),   // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_slide(frame, app, main_chunks[1]);
    if show_progress {
        draw_progress(frame, app, main_chunks[2]);
    }
    draw_status_bar(frame, app, main_chunks[3]);
    if show_footer {
        draw_footer(frame, app, main_chunks[4]);
    }

    // 帮助弹窗覆盖在幻灯片之上
    if app.current_screen == CurrentScreen::Help {
        draw_help_screen(frame, app, main_chunks[1]);
    }
}
