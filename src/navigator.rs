//! Keyboard navigation between slides
//!
//! `Navigator` turns key presses into fragment changes. It owns no slide
//! state: each call re-reads the slide count and the active slide from the
//! document it is handed, and reads the current fragment from the store.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::deck::{SlideDocument, SlideId};
use crate::fragment::FragmentStore;

/// A key press, named by its DOM `KeyboardEvent.code`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavKey {
    Space,
    ArrowRight,
    ArrowLeft,
    Other(String),
}

impl NavKey {
    pub fn code(&self) -> &str {
        match self {
            NavKey::Space => "Space",
            NavKey::ArrowRight => "ArrowRight",
            NavKey::ArrowLeft => "ArrowLeft",
            NavKey::Other(code) => code,
        }
    }

    pub fn request(&self) -> Request {
        match self {
            NavKey::Space | NavKey::ArrowRight => Request::Next,
            NavKey::ArrowLeft => Request::Prev,
            NavKey::Other(_) => Request::None,
        }
    }
}

impl From<&str> for NavKey {
    fn from(code: &str) -> Self {
        match code {
            "Space" => NavKey::Space,
            "ArrowRight" => NavKey::ArrowRight,
            "ArrowLeft" => NavKey::ArrowLeft,
            other => NavKey::Other(other.to_string()),
        }
    }
}

impl FromStr for NavKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NavKey::from(s))
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What a key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Next,
    Prev,
    None,
}

/// Why a key press left the fragment alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    UnrecognizedKey,
    /// The fragment targets no slide element
    NoActiveSlide,
    /// The active slide's id has no number after `slide`
    UnparsableIndex,
    AtLastSlide,
    AtFirstSlide,
}

/// Outcome of one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Transition {
    Moved { from: String, to: String },
    Ignored { reason: IgnoreReason },
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }

    fn ignored(reason: IgnoreReason) -> Self {
        Transition::Ignored { reason }
    }
}

pub struct Navigator<F> {
    fragment: F,
}

impl<F: FragmentStore> Navigator<F> {
    pub fn new(fragment: F) -> Self {
        Self { fragment }
    }

    pub fn fragment(&self) -> &F {
        &self.fragment
    }

    /// Point an unset fragment at the first slide
    ///
    /// Returns whether the fragment was changed.
    pub fn on_load(&self) -> bool {
        if self.fragment.get().is_some() {
            return false;
        }
        self.fragment.set(&SlideId::FIRST.to_string());
        debug!("No fragment on load, starting at {}", SlideId::FIRST);
        true
    }

    /// Apply one key press
    ///
    /// Forward moves need an active slide that is not the last one. Backward
    /// moves need an active slide that is not the first one. Anything else
    /// is a no-op.
    pub fn handle_key<D>(&self, doc: &D, key: &NavKey) -> Transition
    where
        D: SlideDocument + ?Sized,
    {
        let slide_count = doc.slide_count() as i64;
        let current = self.fragment.get();
        let active = current.as_deref().and_then(|f| doc.target(f));

        let transition = self.decide(slide_count, active, key);
        if let Transition::Moved { to, .. } = &transition {
            self.fragment.set(to);
        }

        debug!(
            key = %key,
            slide_count,
            fragment = current.as_deref().unwrap_or(""),
            "{:?}",
            transition
        );
        transition
    }

    fn decide(&self, slide_count: i64, active: Option<&str>, key: &NavKey) -> Transition {
        let request = key.request();
        if request == Request::None {
            return Transition::ignored(IgnoreReason::UnrecognizedKey);
        }

        let Some(active) = active else {
            return Transition::ignored(IgnoreReason::NoActiveSlide);
        };
        let Some(slide) = SlideId::from_element_id(active) else {
            return Transition::ignored(IgnoreReason::UnparsableIndex);
        };

        let target = match request {
            Request::Next if slide.index() < slide_count - 1 => slide.next(),
            Request::Next => return Transition::ignored(IgnoreReason::AtLastSlide),
            Request::Prev if slide.index() > 0 => slide.prev(),
            Request::Prev => return Transition::ignored(IgnoreReason::AtFirstSlide),
            Request::None => return Transition::ignored(IgnoreReason::UnrecognizedKey),
        };

        Transition::Moved {
            from: active.to_string(),
            to: target.to_string(),
        }
    }
}
