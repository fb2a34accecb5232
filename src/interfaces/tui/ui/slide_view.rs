use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{accent_color, colors};

/// Draw the section the fragment targets
///
/// When nothing is targeted the area stays empty apart from a hint, the same
/// way a page whose hash matches no section shows none of them.
pub fn draw_slide(frame: &mut Frame, app: &App, area: Rect) {
    let accent = accent_color(app.presenter.accent_color);

    let Some((index, section)) = app.visible() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("{} targets no section", app.href()).fg(colors::MUTED)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        );
        frame.render_widget(hint, area);
        return;
    };

    let title = match (&section.title, &section.id) {
        (Some(title), _) => format!(" {} ", title),
        (None, Some(id)) => format!(" {} ", id),
        (None, None) => format!(" #{} ", index),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(accent).bold())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let body: Vec<Line> = section
        .body
        .iter()
        .map(|line| Line::from(line.as_str().fg(colors::TEXT)))
        .collect();

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }),
        inner.inner(Margin::new(2, 1)),
    );
}
