use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{accent_color, colors, popup};

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let accent = accent_color(app.presenter.accent_color);
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .theme_color(accent)
        .render(frame, area);

    let heading = |text: &'static str| {
        Line::from(vec![Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<18}", key), Style::default().fg(accent)),
            Span::styled(desc, Style::default().fg(colors::TEXT)),
        ])
    };

    let help_text = vec![
        Line::from(""),
        heading("NAVIGATION"),
        entry("Space, Right", "Next slide"),
        entry("Left", "Previous slide"),
        Line::from(""),
        heading("PRESENTER"),
        entry("?", "Toggle this help"),
        entry("q, Esc, Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Other keys are ignored. Edits to the deck file are picked up live.",
            Style::default().fg(colors::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
