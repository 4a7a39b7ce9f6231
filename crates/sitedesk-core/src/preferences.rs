//! Persisted user preferences
//!
//! [`PreferenceStore`] is a string key/value seam so an embedding
//! application can back preferences with whatever storage it has.
//! [`MemoryPreferences`] keeps them in process.

use sitedesk_model::Theme;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Key under which the theme is stored
pub const THEME_KEY: &str = "theme";

/// String key/value preference storage
pub trait PreferenceStore {
    /// Stored value for `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory preference storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with one value already present
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Active theme, written through to a [`PreferenceStore`]
pub struct ThemePreferences {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemePreferences {
    /// Restore the stored theme, or `fallback` when nothing valid is stored
    ///
    /// The resolved theme is written back immediately.
    pub fn load(store: impl PreferenceStore + 'static, fallback: Theme) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(stored) => stored.parse().unwrap_or_else(|_| {
                warn!(value = %stored, "ignoring unknown stored theme");
                fallback
            }),
            None => fallback,
        };
        let mut prefs = Self {
            store: Box::new(store),
            theme,
        };
        prefs.persist();
        prefs
    }

    #[inline]
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist();
    }

    /// Switch between light and dark, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Underlying storage
    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    fn persist(&mut self) {
        debug!(theme = self.theme.as_str(), "theme saved");
        self.store.set(THEME_KEY, self.theme.as_str());
    }
}

impl std::fmt::Debug for ThemePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferences")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
