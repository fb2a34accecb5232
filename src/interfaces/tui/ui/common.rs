use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, LineGauge, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{accent_color, colors};

/// Draw title bar with deck name, fragment and position
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let accent = accent_color(app.presenter.accent_color);
    let deck_name = app
        .source
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let position = match app.visible() {
        Some((index, _)) => format!("{} / {}", index + 1, app.slide_count()),
        None => format!("- / {}", app.slide_count()),
    };

    let title_text = vec![Line::from(vec![
        Span::styled("Slidenav", Style::default().fg(accent).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(format!("{} ", deck_name), Style::default().fg(colors::TEXT)),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(format!("{} ", app.href()), Style::default().fg(Color::Yellow)),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(position, Style::default().fg(Color::Yellow)),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw a one-line gauge of how far into the deck the visible slide is
pub fn draw_progress(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.slide_count();
    let ratio = match app.visible() {
        Some((index, _)) if count > 0 => (index + 1) as f64 / count as f64,
        _ => 0.0,
    };

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(accent_color(app.presenter.accent_color)))
        .unfilled_style(Style::default().fg(colors::MUTED))
        .label("")
        .ratio(ratio.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else {
        (
            "Ready".to_string(),
            Style::default().fg(accent_color(app.presenter.accent_color)),
        )
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let accent = accent_color(app.presenter.accent_color);
    let shortcuts = match app.current_screen {
        CurrentScreen::Presenting => vec![
            ("Space/Right", "Next", accent),
            ("Left", "Previous", accent),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Help => vec![("?/Esc", "Close", colors::ERROR)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors::TEXT),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
