//! Headless key stepping
//!
//! Runs the same navigator the presenter uses against a deck file, without a
//! terminal. Useful for scripting and for checking a deck's ids.

use colored::Colorize;
use serde::Serialize;

use crate::deck::Deck;
use crate::fragment::SessionFragment;
use crate::interfaces::cli::CliError;
use crate::navigator::{NavKey, Navigator, Transition};

#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub key: String,
    #[serde(flatten)]
    pub transition: Transition,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    /// Whether loading moved an unset fragment to slide0
    pub initialized: bool,
    pub steps: Vec<StepRecord>,
    /// Final fragment, `#`-prefixed
    pub fragment: String,
    pub history: Vec<String>,
}

/// Load, then apply `keys` in order
pub fn run_steps(deck: &Deck, start: Option<&str>, keys: &[String]) -> StepReport {
    let store = match start {
        Some(fragment) => SessionFragment::with_initial(fragment),
        None => SessionFragment::new(),
    };
    let navigator = Navigator::new(store.clone());
    let initialized = navigator.on_load();

    let steps = keys
        .iter()
        .map(|code| {
            let key = NavKey::from(code.as_str());
            StepRecord {
                key: key.code().to_string(),
                transition: navigator.handle_key(deck, &key),
            }
        })
        .collect();

    StepReport {
        initialized,
        steps,
        fragment: store.href(),
        history: store.history(),
    }
}

pub fn step_keys(
    deck_path: String,
    keys: Vec<String>,
    fragment: Option<String>,
    trace: bool,
    json: bool,
) -> Result<(), CliError> {
    let deck = Deck::load(&deck_path)?;
    let report = run_steps(&deck, fragment.as_deref(), &keys);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::CommandError(format!("Failed to encode report: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if trace {
        if report.initialized {
            println!("{} {}", "load".dimmed(), "-> #slide0".green());
        }
        for record in &report.steps {
            match &record.transition {
                Transition::Moved { from, to } => println!(
                    "{:<12} #{} -> {}",
                    record.key.cyan(),
                    from,
                    format!("#{}", to).green()
                ),
                Transition::Ignored { reason } => println!(
                    "{:<12} {}",
                    record.key.cyan(),
                    format!("ignored ({:?})", reason).dimmed()
                ),
            }
        }
    }

    println!("{}", report.fragment);
    Ok(())
}
