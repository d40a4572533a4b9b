// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! The theme is written back to `settings.toml` on every toggle, and the
//! language on every selection. There is no save-on-exit path.

use crate::app::config;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Persists the current theme to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the config functions directly with an override directory.
pub fn persist_theme(mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _warning) = config::load();
    cfg.general.theme = Some(mode);

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

/// Persists the selected locale to disk.
pub fn persist_language(locale: &LanguageIdentifier) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _warning) = config::load();
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
