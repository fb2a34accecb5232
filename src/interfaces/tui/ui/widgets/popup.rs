//! 居中弹窗容器

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

/// 弹窗容器
///
/// 清除背景、绘制边框，返回可用于绘制内容的内部区域
pub struct Popup<'a> {
    title: &'a str,
    color: Color,
    size: PopupSize,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: Color::Cyan,
            size,
        }
    }

    /// 设置主题颜色（标题和边框）
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color));
        frame.render_widget(block, popup_area);

        popup_area.inner(Margin::new(2, 1))
    }
}

/// 按百分比在给定区域中创建居中矩形
pub fn centered_rect(size: PopupSize, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(size.height)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(size.width)])
        .flex(Flex::Center)
        .areas(row);
    area
}
