//! Persisted preferences: theme and favorites colorization.
//!
//! Each preference is its own document so a corrupt value only resets
//! itself. Absent or unreadable values fall back to defaults.

use crate::core::error::IdeapodError;
use crate::core::localstore::{self, COLORED_FAVORITES_DOC, THEME_DOC};
use crate::core::store::Store;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// `System` resolves through the `COLORFGBG` hint some terminals set
    /// to `"<fg>;<bg>"`. Backgrounds 7 and 15 are the standard light
    /// ones; everything else (including no hint) reads as dark.
    pub fn resolve(self) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System => {
                let bg = std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| v.rsplit(';').next().and_then(|s| s.parse::<u8>().ok()));
                match bg {
                    Some(7) | Some(15) => ResolvedTheme::Light,
                    _ => ResolvedTheme::Dark,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub theme: Theme,
    pub colored_favorites: bool,
}

pub fn load(store: &Store) -> Result<Settings, IdeapodError> {
    let theme = localstore::read_doc::<Theme>(store, THEME_DOC)?.unwrap_or_default();
    let colored_favorites =
        localstore::read_doc::<bool>(store, COLORED_FAVORITES_DOC)?.unwrap_or(false);
    Ok(Settings {
        theme,
        colored_favorites,
    })
}

pub fn set_theme(store: &Store, theme: Theme) -> Result<(), IdeapodError> {
    localstore::write_doc(store, THEME_DOC, &theme)
}

pub fn set_colored_favorites(store: &Store, on: bool) -> Result<(), IdeapodError> {
    localstore::write_doc(store, COLORED_FAVORITES_DOC, &on)
}
