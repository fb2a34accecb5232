use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::errors::{Result, SlidenavError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "slidenav.toml";

/// 环境变量前缀，例如 SLIDENAV__LOGGING__LEVEL=debug
pub const ENV_PREFIX: &str = "SLIDENAV";

/// 演示器强调色
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Cyan,
    Green,
    Yellow,
    Magenta,
    Blue,
    Red,
    White,
}

impl AccentColor {
    /// 所有可选值，逗号分隔（用于错误提示）
    pub fn valid_values() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for AccentColor {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::iter().find(|v| v.as_ref() == lower).ok_or_else(|| {
            format!(
                "Invalid accent color: '{}'. Valid: {}",
                s,
                Self::valid_values()
            )
        })
    }
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - logging: 日志配置
/// - presenter: 终端演示器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub presenter: PresenterConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：SLIDENAV，分隔符：__
    pub fn try_load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let explicit = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（显式指定时必须存在）
            .add_source(File::with_name(path).required(explicit))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置，失败时回退到默认值
    ///
    /// 此时日志系统尚未初始化，只能输出到 stderr
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] {}", e.format_simple());
                eprintln!("[WARN] Falling back to default configuration");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(SlidenavError::config(format!(
                    "Invalid logging.format: '{}'. Valid: text, json",
                    other
                )));
            }
        }
        if self.presenter.poll_interval_ms == 0 {
            return Err(SlidenavError::config(
                "presenter.poll_interval_ms must be greater than 0",
            ));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// text | json
    #[serde(default = "default_log_format")]
    pub format: String,
    /// 未设置时：CLI 输出到 stderr，TUI 丢弃日志
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 终端演示器配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresenterConfig {
    #[serde(default = "default_true")]
    pub show_footer: bool,
    #[serde(default = "default_true")]
    pub show_progress: bool,
    #[serde(default)]
    pub accent_color: AccentColor,
    /// 事件轮询间隔，同时决定检查 deck 文件变化的频率
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// 启动时的片段（不含 #），为空时从 slide0 开始
    #[serde(default)]
    pub initial_fragment: Option<String>,
}

// ============================================================
// Default value functions
// ============================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_true() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    250
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            show_footer: true,
            show_progress: true,
            accent_color: AccentColor::default(),
            poll_interval_ms: default_poll_interval_ms(),
            initial_fragment: None,
        }
    }
}
