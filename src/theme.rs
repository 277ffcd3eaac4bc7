//! Explicit theme state for consuming views.
//!
//! Replaces document-level style markers with a value object: the preference
//! is read from the profile store once at initialization and written back
//! only from explicit user-action handlers via [`ThemeState::set`].

use crate::storage::{ProfileStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference string; anything unrecognized is light.
    pub fn from_preference(preference: &str) -> Self {
        match preference {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Current theme, owned by the caller and passed through the view hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Load the persisted preference, defaulting to light when absent.
    pub fn load(store: &dyn ProfileStore) -> Self {
        let current = store
            .theme_preference()
            .map(|preference| Theme::from_preference(&preference))
            .unwrap_or_default();
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch theme and write the preference through to the store.
    pub fn set(&mut self, theme: Theme, store: &dyn ProfileStore) -> Result<(), StoreError> {
        self.current = theme;
        store.set_theme_preference(theme.as_str())
    }
}
