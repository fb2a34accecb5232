//! Presenter state

use tracing::{info, warn};

use crate::config::PresenterConfig;
use crate::deck::{DeckSource, Section, SlideDocument};
use crate::errors::{Result, SlidenavError};
use crate::fragment::{FragmentStore, SessionFragment};
use crate::navigator::{NavKey, Navigator, Transition};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Presenting,
    Help,
}

pub struct App {
    pub source: DeckSource,
    pub navigator: Navigator<SessionFragment>,
    pub current_screen: CurrentScreen,
    pub status_message: String,
    pub error_message: String,
    pub presenter: PresenterConfig,
}

impl App {
    /// Open the deck and run the load step
    ///
    /// `fragment` wins over `presenter.initial_fragment`. With neither, the
    /// presenter starts at slide0.
    pub fn new(deck_path: &str, fragment: Option<&str>, presenter: PresenterConfig) -> Result<Self> {
        let source = DeckSource::open(deck_path)?;
        if source.deck().is_empty() {
            return Err(SlidenavError::validation(format!(
                "{} contains no <section> blocks",
                deck_path
            )));
        }

        let initial = fragment.or(presenter.initial_fragment.as_deref());
        let store = match initial {
            Some(f) => SessionFragment::with_initial(f),
            None => SessionFragment::new(),
        };
        let navigator = Navigator::new(store);
        navigator.on_load();

        let app = Self {
            source,
            navigator,
            current_screen: CurrentScreen::Presenting,
            status_message: String::new(),
            error_message: String::new(),
            presenter,
        };
        if app.visible().is_none() {
            warn!("Fragment {} targets no section", app.href());
        }
        Ok(app)
    }

    pub fn fragment(&self) -> &SessionFragment {
        self.navigator.fragment()
    }

    pub fn href(&self) -> String {
        self.fragment().href()
    }

    /// Section currently on screen, if the fragment targets one
    pub fn visible(&self) -> Option<(usize, &Section)> {
        let fragment = self.fragment().get();
        self.source.deck().visible_section(fragment.as_deref())
    }

    pub fn slide_count(&self) -> usize {
        self.source.deck().slide_count()
    }

    /// Pick up edits to the deck file
    pub fn refresh_deck(&mut self) {
        match self.source.refresh() {
            Ok(true) => {
                info!("Deck reloaded: {} sections", self.slide_count());
                self.error_message.clear();
                self.status_message = format!("Reloaded {} sections", self.slide_count());
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Deck reload failed: {}", e);
                self.error_message = e.format_simple();
            }
        }
    }

    /// Apply a key press against the deck as it is on disk right now
    pub fn press(&mut self, key: &NavKey) -> Transition {
        self.refresh_deck();
        let transition = self.navigator.handle_key(self.source.deck(), key);
        if transition.moved() {
            self.status_message.clear();
        }
        transition
    }

    pub fn toggle_help(&mut self) {
        self.current_screen = match self.current_screen {
            CurrentScreen::Presenting => CurrentScreen::Help,
            CurrentScreen::Help => CurrentScreen::Presenting,
        };
    }
}
