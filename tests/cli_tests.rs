use slidenav::deck::Deck;
use slidenav::interfaces::cli::CliError;
use slidenav::interfaces::cli::commands::run_steps;
use slidenav::navigator::{IgnoreReason, Transition};

fn keys(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

fn three_slides() -> Deck {
    Deck::parse(
        r#"<section id="slide0"></section>
<section id="slide1"></section>
<section id="slide2"></section>"#,
    )
    .unwrap()
}

#[cfg(test)]
mod run_steps_tests {
    use super::*;

    #[test]
    fn test_fresh_load_then_forward() {
        let report = run_steps(&three_slides(), None, &keys(&["ArrowRight", "Space"]));
        assert!(report.initialized);
        assert_eq!(report.fragment, "#slide2");
        assert_eq!(report.history, vec!["slide0", "slide1", "slide2"]);
        assert!(report.steps.iter().all(|s| s.transition.moved()));
    }

    #[test]
    fn test_start_fragment_is_kept() {
        let report = run_steps(&three_slides(), Some("#slide2"), &keys(&["ArrowLeft"]));
        assert!(!report.initialized);
        assert_eq!(report.fragment, "#slide1");
    }

    #[test]
    fn test_ignored_steps_are_reported() {
        let report = run_steps(
            &three_slides(),
            Some("slide2"),
            &keys(&["ArrowRight", "KeyQ"]),
        );
        assert_eq!(report.fragment, "#slide2");
        assert_eq!(report.steps[0].key, "ArrowRight");
        assert_eq!(
            report.steps[0].transition,
            Transition::Ignored {
                reason: IgnoreReason::AtLastSlide
            }
        );
        assert_eq!(
            report.steps[1].transition,
            Transition::Ignored {
                reason: IgnoreReason::UnrecognizedKey
            }
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = run_steps(&three_slides(), None, &keys(&["ArrowRight", "ArrowUp"]));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["initialized"], true);
        assert_eq!(value["fragment"], "#slide1");
        assert_eq!(value["steps"][0]["key"], "ArrowRight");
        assert_eq!(value["steps"][0]["result"], "moved");
        assert_eq!(value["steps"][0]["from"], "slide0");
        assert_eq!(value["steps"][0]["to"], "slide1");
        assert_eq!(value["steps"][1]["result"], "ignored");
        assert_eq!(value["steps"][1]["reason"], "unrecognized_key");
    }
}

#[cfg(test)]
mod cli_error_tests {
    use super::*;
    use slidenav::errors::SlidenavError;

    #[test]
    fn test_slidenav_error_becomes_load_error() {
        let err: CliError = SlidenavError::file_operation("Failed to read deck x").into();
        assert!(matches!(err, CliError::LoadError(_)));
        assert_eq!(
            err.to_string(),
            "Load error: File Operation Error: Failed to read deck x"
        );
    }

    #[test]
    fn test_command_error_display() {
        let err = CliError::CommandError("boom".to_string());
        assert_eq!(err.format_simple(), "Command error: boom");
        assert!(err.format_colored().contains("boom"));
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;
    use slidenav::config::StaticConfig;
    use slidenav::interfaces::cli::commands::{config_generate, list_slides, step_keys};

    #[test]
    fn test_config_generate_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slidenav.toml");
        std::fs::write(&path, "# existing\n").unwrap();
        let path = path.to_str().unwrap().to_string();

        let err = config_generate(Some(path.clone()), false).unwrap_err();
        assert!(matches!(err, CliError::CommandError(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing\n");

        config_generate(Some(path.clone()), true).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: StaticConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }

    #[test]
    fn test_commands_report_missing_deck() {
        let missing = "/nonexistent/deck.html".to_string();
        assert!(matches!(
            list_slides(missing.clone(), false),
            Err(CliError::LoadError(_))
        ));
        assert!(matches!(
            step_keys(missing, keys(&["Space"]), None, false, false),
            Err(CliError::LoadError(_))
        ));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_present_is_not_a_cli_command() {
        use slidenav::cli::Commands;
        use slidenav::interfaces::cli::run_cli_command;

        let result = run_cli_command(Commands::Present {
            deck: "deck.html".to_string(),
            fragment: None,
        });
        assert!(matches!(result, Err(CliError::CommandError(_))));
    }

    #[test]
    fn test_commands_on_deck_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.html");
        std::fs::write(&path, "<section id=\"slide0\"></section><section id=\"slide1\"></section>")
            .unwrap();
        let path = path.to_str().unwrap().to_string();

        list_slides(path.clone(), false).unwrap();
        list_slides(path.clone(), true).unwrap();
        step_keys(path, keys(&["ArrowRight"]), None, true, false).unwrap();
    }
}
