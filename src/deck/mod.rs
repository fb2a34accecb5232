//! Slide decks
//!
//! A deck is whatever `<section>` blocks a markup file contains. Slide
//! existence and order come from that structure alone; nothing here keeps a
//! separate index of slides.

mod markup;
mod slide_id;
mod source;

pub use slide_id::{SLIDE_PREFIX, SlideId};
pub use source::DeckSource;

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::errors::{Result, SlidenavError};

/// Read-only view of the document structure the navigator consults
///
/// Implementations are queried afresh on every key press.
pub trait SlideDocument {
    /// Number of slide sections, identified or not
    fn slide_count(&self) -> usize;

    /// Id of the slide element the fragment targets
    ///
    /// Only ids starting with `slide` can be targeted.
    fn target(&self, fragment: &str) -> Option<&str>;
}

/// One `<section>` of a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    sections: Vec<Section>,
}

impl Deck {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Parse deck markup
    ///
    /// Input without any section is a valid, empty deck.
    pub fn parse(src: &str) -> Result<Self> {
        let sections = markup::scan_sections(src)?
            .into_iter()
            .map(|raw| Section {
                id: raw.attr("id").map(str::to_string),
                title: raw.text.title,
                body: raw.text.body,
            })
            .collect::<Vec<_>>();

        debug!("Parsed deck with {} sections", sections.len());
        Ok(Self::new(sections))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&read_source(path.as_ref())?)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section shown for the given fragment
    ///
    /// Mirrors a `section:target` style rule: whichever section carries the
    /// fragment as its id is visible, regardless of the `slide` prefix.
    pub fn visible_section(&self, fragment: Option<&str>) -> Option<(usize, &Section)> {
        let fragment = fragment.filter(|f| !f.is_empty())?;
        self.sections
            .iter()
            .enumerate()
            .find(|(_, section)| section.id.as_deref() == Some(fragment))
    }
}

impl SlideDocument for Deck {
    fn slide_count(&self) -> usize {
        self.sections.len()
    }

    fn target(&self, fragment: &str) -> Option<&str> {
        if fragment.is_empty() {
            return None;
        }
        self.sections
            .iter()
            .filter_map(|section| section.id.as_deref())
            .find(|id| id.starts_with(SLIDE_PREFIX) && *id == fragment)
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        SlidenavError::file_operation(format!("Failed to read deck {}: {}", path.display(), e))
    })
}
