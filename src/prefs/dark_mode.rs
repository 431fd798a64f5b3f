//! Persisted light/dark theme choice.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::store::PreferenceStore;
use crate::error::PreferenceError;

/// Key the theme is stored under.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toast shown after switching to this theme.
    #[must_use]
    pub fn activation_message(self) -> &'static str {
        match self {
            Theme::Light => "Light mode activated",
            Theme::Dark => "Dark mode activated",
        }
    }

    fn stored_value(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Theme preference backed by a [`PreferenceStore`].
///
/// ```
/// use tictactoe_pro::prefs::{DarkMode, MemoryStore, Theme};
///
/// let mut mode = DarkMode::load(MemoryStore::new(), false);
/// assert_eq!(mode.theme(), Theme::Light);
/// assert_eq!(mode.toggle().unwrap(), Theme::Dark);
/// ```
#[derive(Clone, Debug)]
pub struct DarkMode<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> DarkMode<S> {
    /// Read the stored choice. `"true"` means dark and `"false"` means light;
    /// anything else falls back to the system preference.
    pub fn load(store: S, system_prefers_dark: bool) -> Self {
        let theme = match store.get(DARK_MODE_KEY).as_deref() {
            Some("true") => Theme::Dark,
            Some("false") => Theme::Light,
            _ if system_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        };
        Self { store, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch themes and persist the choice. On a failed write the theme is
    /// left as it was.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.store.set(DARK_MODE_KEY, next.stored_value())?;
        self.theme = next;
        info!(theme = %next, "theme changed");
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
