use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::storage::PreferenceStore;

/// Key of the persisted theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    Unknown(String),
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// Receives every theme change so the style layer can follow it.
pub trait ThemeSink {
    fn apply(&self, theme: Theme);
}

/// Single owner of the page theme.
///
/// The preference is mirrored into `store` best-effort and into `sink` on
/// load and on every change.
#[derive(Debug)]
pub struct ThemeState<S, K> {
    current: Theme,
    store: S,
    sink: K,
}

impl<S: PreferenceStore, K: ThemeSink> ThemeState<S, K> {
    pub fn load(store: S, sink: K) -> Self {
        let current = match store.load(THEME_KEY) {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("ignoring stored theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::debug!("theme preference not loaded: {e}");
                Theme::default()
            }
        };
        sink.apply(current);
        Self {
            current,
            store,
            sink,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(e) = self.store.save(THEME_KEY, theme.as_str()) {
            log::debug!("theme preference not saved: {e}");
        }
        self.sink.apply(theme);
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }
}

/// Open/closed flag of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
