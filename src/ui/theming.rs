// SPDX-License-Identifier: MPL-2.0
//! Three-way theme mode (light, dark, night-vision) and its color schemes.
//!
//! The mode is a single discriminant; toggling is a pure transition on it and
//! the caller persists the result. Night-vision is a dark variant: a screen
//! full of red light that can be glanced at during a night feed without
//! resetting dark adaptation. Leaving night-vision always lands on dark,
//! never light.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::theme::{self, Theme};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Night-vision theme: red on near-black only.
    #[must_use]
    pub fn night_vision() -> Self {
        Self {
            surface_primary: palette::NIGHT_900,
            surface_secondary: palette::NIGHT_700,
            surface_tertiary: palette::NIGHT_700,

            text_primary: palette::NIGHT_100,
            text_secondary: palette::NIGHT_300,

            brand_primary: palette::NIGHT_500,
            brand_secondary: palette::NIGHT_300,

            // Semantic colors collapse into the red scale.
            error: palette::NIGHT_100,
            warning: palette::NIGHT_300,
            success: palette::NIGHT_300,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::NIGHT_100,
        }
    }
}

/// The application's visual theme, a single three-valued discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    NightVision,
}

impl ThemeMode {
    /// Flips between day and night presentation.
    ///
    /// From night-vision this exits to dark, not light.
    #[must_use]
    pub fn toggle_day_night(self) -> Self {
        match self {
            ThemeMode::NightVision => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Enters night-vision, or exits it back to dark.
    #[must_use]
    pub fn toggle_night_vision(self) -> Self {
        match self {
            ThemeMode::NightVision => ThemeMode::Dark,
            ThemeMode::Light | ThemeMode::Dark => ThemeMode::NightVision,
        }
    }

    /// Returns true if the presentation is dark. Night-vision is always dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        !matches!(self, ThemeMode::Light)
    }

    /// Resolves the startup mode: a persisted choice wins; otherwise the
    /// ambient preference picks plain dark or light.
    #[must_use]
    pub fn restore(persisted: Option<ThemeMode>, system_prefers_dark: bool) -> Self {
        match persisted {
            Some(mode) => mode,
            None if system_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    /// The color scheme for this mode.
    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::NightVision => ColorScheme::night_vision(),
        }
    }

    /// Fluent key for the localized mode name.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::NightVision => "theme-night-vision",
        }
    }

    /// Maps the mode onto an Iced theme so built-in widgets follow along.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::NightVision => Theme::custom(
                "NightVision".to_string(),
                theme::Palette {
                    background: palette::NIGHT_900,
                    text: palette::NIGHT_100,
                    primary: palette::NIGHT_500,
                    success: palette::NIGHT_300,
                    warning: palette::NIGHT_300,
                    danger: palette::NIGHT_100,
                },
            ),
        }
    }
}

/// Queries the operating system's preferred color scheme.
///
/// Detection errors count as a dark preference.
#[must_use]
pub fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}
