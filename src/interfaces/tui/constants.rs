//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use crate::config::AccentColor;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(60, 60);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 正文颜色
    pub const TEXT: Color = Color::White;
}

/// 配置中的强调色转换为终端颜色
pub fn accent_color(accent: AccentColor) -> ratatui::style::Color {
    use ratatui::style::Color;
    match accent {
        AccentColor::Cyan => Color::Cyan,
        AccentColor::Green => Color::Green,
        AccentColor::Yellow => Color::Yellow,
        AccentColor::Magenta => Color::Magenta,
        AccentColor::Blue => Color::Blue,
        AccentColor::Red => Color::Red,
        AccentColor::White => Color::White,
    }
}
