use std::fmt;

#[derive(Debug, Clone)]
pub enum SlidenavError {
    Config(String),
    FileOperation(String),
    Validation(String),
    DeckParse(String),
    Serialization(String),
    Terminal(String),
}

impl SlidenavError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SlidenavError::Config(_) => "E001",
            SlidenavError::FileOperation(_) => "E002",
            SlidenavError::Validation(_) => "E003",
            SlidenavError::DeckParse(_) => "E004",
            SlidenavError::Serialization(_) => "E005",
            SlidenavError::Terminal(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SlidenavError::Config(_) => "Configuration Error",
            SlidenavError::FileOperation(_) => "File Operation Error",
            SlidenavError::Validation(_) => "Validation Error",
            SlidenavError::DeckParse(_) => "Deck Parse Error",
            SlidenavError::Serialization(_) => "Serialization Error",
            SlidenavError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SlidenavError::Config(msg)
            | SlidenavError::FileOperation(msg)
            | SlidenavError::Validation(msg)
            | SlidenavError::DeckParse(msg)
            | SlidenavError::Serialization(msg)
            | SlidenavError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SlidenavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SlidenavError {}

// 便捷的构造函数
impl SlidenavError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        SlidenavError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SlidenavError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SlidenavError::Validation(msg.into())
    }

    pub fn deck_parse<T: Into<String>>(msg: T) -> Self {
        SlidenavError::DeckParse(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SlidenavError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        SlidenavError::Terminal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for SlidenavError {
    fn from(err: std::io::Error) -> Self {
        SlidenavError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for SlidenavError {
    fn from(err: config::ConfigError) -> Self {
        SlidenavError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SlidenavError {
    fn from(err: toml::ser::Error) -> Self {
        SlidenavError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for SlidenavError {
    fn from(err: serde_json::Error) -> Self {
        SlidenavError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlidenavError>;
