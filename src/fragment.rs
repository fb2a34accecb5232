//! Navigation fragment
//!
//! The part of a presentation address after `#`. It is the only mutable
//! state navigation touches, so it is modelled as an injected store rather
//! than an ambient global.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

/// Read/write access to the navigation fragment
pub trait FragmentStore {
    /// Current fragment without the leading `#`, `None` when unset
    fn get(&self) -> Option<String>;

    /// Replace the fragment; a leading `#` is accepted and dropped
    fn set(&self, fragment: &str);
}

#[derive(Debug, Default)]
struct FragmentState {
    current: String,
    history: Vec<String>,
}

/// Session-wide fragment with its history of entries
///
/// Clones share the same value, so the renderer and the key handler always
/// see the same fragment.
#[derive(Debug, Clone, Default)]
pub struct SessionFragment {
    inner: Arc<RwLock<FragmentState>>,
}

impl SessionFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing fragment, as if the page was opened at it
    pub fn with_initial(fragment: &str) -> Self {
        let store = Self::new();
        let fragment = normalize(fragment);
        if !fragment.is_empty() {
            let mut state = store.inner.write();
            state.current = fragment.to_string();
            state.history.push(fragment.to_string());
        }
        store
    }

    /// Fragment formatted as it appears in an address, e.g. `#slide2`
    pub fn href(&self) -> String {
        format!("#{}", self.inner.read().current)
    }

    /// Every fragment the session has been at, oldest first
    pub fn history(&self) -> Vec<String> {
        self.inner.read().history.clone()
    }
}

impl FragmentStore for SessionFragment {
    fn get(&self) -> Option<String> {
        let state = self.inner.read();
        (!state.current.is_empty()).then(|| state.current.clone())
    }

    fn set(&self, fragment: &str) {
        let fragment = normalize(fragment);
        let mut state = self.inner.write();
        // Assigning the current value again does not create a history entry
        if state.current == fragment {
            return;
        }
        trace!("Fragment: #{} -> #{}", state.current, fragment);
        state.current = fragment.to_string();
        state.history.push(fragment.to_string());
    }
}

fn normalize(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}
