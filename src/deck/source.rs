//! File-backed deck that follows edits on disk

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Deck, read_source};
use crate::errors::Result;

/// A deck file plus the last successfully parsed contents
///
/// `refresh` re-reads the file and reparses it whenever the text differs
/// from what was last parsed, so sections added or removed between two key
/// presses are visible to the next one.
#[derive(Debug)]
pub struct DeckSource {
    path: PathBuf,
    deck: Deck,
    /// Text the current deck was parsed from
    contents: String,
}

impl DeckSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = read_source(&path)?;
        let deck = Deck::parse(&contents)?;
        info!(
            "Loaded deck {} ({} sections)",
            path.display(),
            deck.len()
        );
        Ok(Self {
            path,
            deck,
            contents,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Reload if the file's text changed since the last parse
    ///
    /// The comparison is on contents, not modification time, so an edit
    /// that keeps the file length and lands within one mtime tick is still
    /// seen. Returns whether a reload happened. On error the previous deck
    /// is kept.
    pub fn refresh(&mut self) -> Result<bool> {
        let contents = read_source(&self.path)?;
        if contents == self.contents {
            return Ok(false);
        }
        self.apply(contents)?;
        Ok(true)
    }

    /// Unconditionally re-read the file
    pub fn reload(&mut self) -> Result<()> {
        let contents = read_source(&self.path)?;
        self.apply(contents)
    }

    fn apply(&mut self, contents: String) -> Result<()> {
        let deck = Deck::parse(&contents)?;
        debug!(
            "Reloaded deck {}: {} -> {} sections",
            self.path.display(),
            self.deck.len(),
            deck.len()
        );
        self.deck = deck;
        self.contents = contents;
        Ok(())
    }
}
