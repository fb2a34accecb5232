use std::io::Write;

use slidenav::config::{
    AccentColor, LoggingConfig, PresenterConfig, StaticConfig, get_config, update_config,
};
use slidenav::errors::SlidenavError;
use tempfile::{Builder, NamedTempFile};

fn toml_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[cfg(test)]
mod default_tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "text");
        assert_eq!(logging.file, None);
        assert_eq!(logging.max_backups, 5);
        assert!(logging.enable_rotation);
    }

    #[test]
    fn test_presenter_defaults() {
        let presenter = PresenterConfig::default();
        assert!(presenter.show_footer);
        assert!(presenter.show_progress);
        assert_eq!(presenter.accent_color, AccentColor::Cyan);
        assert_eq!(presenter.poll_interval_ms, 250);
        assert_eq!(presenter.initial_fragment, None);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(StaticConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let file = toml_file(
            r#"
[logging]
level = "debug"
format = "json"

[presenter]
accent_color = "magenta"
show_footer = false
initial_fragment = "slide2"
"#,
        );

        let config = StaticConfig::try_load(file.path().to_str()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.max_backups, 5);
        assert_eq!(config.presenter.accent_color, AccentColor::Magenta);
        assert!(!config.presenter.show_footer);
        assert!(config.presenter.show_progress);
        assert_eq!(config.presenter.initial_fragment.as_deref(), Some("slide2"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = StaticConfig::try_load(Some("/nonexistent/slidenav.toml")).unwrap_err();
        assert!(matches!(err, SlidenavError::Config(_)));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = StaticConfig::load(Some("/nonexistent/slidenav.toml"));
        assert_eq!(config, StaticConfig::default());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let file = toml_file("[logging]\nformat = \"xml\"\n");
        let err = StaticConfig::try_load(file.path().to_str()).unwrap_err();
        assert!(matches!(err, SlidenavError::Config(_)));
        assert!(err.message().contains("xml"));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let file = toml_file("[presenter]\npoll_interval_ms = 0\n");
        assert!(StaticConfig::try_load(file.path().to_str()).is_err());
    }

    #[test]
    fn test_unknown_accent_color_rejected() {
        let file = toml_file("[presenter]\naccent_color = \"plaid\"\n");
        assert!(StaticConfig::try_load(file.path().to_str()).is_err());
    }
}

#[cfg(test)]
mod sample_tests {
    use super::*;

    #[test]
    fn test_sample_config_parses_back() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }

    #[test]
    fn test_save_to_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("slidenav.toml");

        let mut config = StaticConfig::default();
        config.presenter.accent_color = AccentColor::Green;
        config.save_to_file(&path).unwrap();

        let loaded = StaticConfig::try_load(path.to_str()).unwrap();
        assert_eq!(loaded.presenter.accent_color, AccentColor::Green);
    }
}

#[cfg(test)]
mod accent_color_tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Yellow".parse::<AccentColor>(), Ok(AccentColor::Yellow));
        assert_eq!("blue".parse::<AccentColor>(), Ok(AccentColor::Blue));
    }

    #[test]
    fn test_from_str_lists_valid_values() {
        let err = "plaid".parse::<AccentColor>().unwrap_err();
        assert!(err.contains("plaid"));
        assert!(err.contains("cyan, green, yellow, magenta, blue, red, white"));
    }

    #[test]
    fn test_display() {
        assert_eq!(AccentColor::Magenta.to_string(), "magenta");
    }
}

#[cfg(test)]
mod global_tests {
    use super::*;

    #[test]
    fn test_update_config_replaces_global() {
        let mut config = StaticConfig::default();
        config.presenter.poll_interval_ms = 100;
        config.presenter.accent_color = AccentColor::Red;
        update_config(config);

        let current = get_config();
        assert_eq!(current.presenter.poll_interval_ms, 100);
        assert_eq!(current.presenter.accent_color, AccentColor::Red);
    }
}
