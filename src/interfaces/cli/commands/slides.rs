//! List slides command

use colored::Colorize;

use crate::deck::{Deck, SlideDocument, SlideId};
use crate::interfaces::cli::CliError;

pub fn list_slides(deck_path: String, json: bool) -> Result<(), CliError> {
    let deck = Deck::load(&deck_path)?;

    if json {
        let out = serde_json::to_string_pretty(deck.sections())
            .map_err(|e| CliError::CommandError(format!("Failed to encode sections: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if deck.is_empty() {
        println!("{} No sections found in {}", "ℹ".bold().blue(), deck_path);
        return Ok(());
    }

    println!("{}", "Sections:".bold().green());
    println!();
    for (index, section) in deck.sections().iter().enumerate() {
        let id = section.id.as_deref().unwrap_or("-");
        // 只有能被片段定位的 id 才能参与导航
        let reachable = section.id.as_deref().is_some_and(|id| {
            deck.target(id).is_some() && SlideId::from_element_id(id).is_some()
        });
        let id = if reachable {
            id.cyan().to_string()
        } else {
            id.yellow().to_string()
        };
        let title = section.title.as_deref().unwrap_or("(untitled)");
        println!("  {:>3}  {:<20} {}", index, id, title);
    }
    println!();
    println!(
        "{} Total {} sections",
        "ℹ".bold().blue(),
        deck.slide_count().to_string().green()
    );
    Ok(())
}
