// SPDX-License-Identifier: MPL-2.0
//! Shared styling helpers driven by the active [`ColorScheme`].
//!
//! Iced's built-in theme covers most widgets once the mode is mapped onto an
//! `iced::Theme`; these helpers cover the surfaces and accents that must
//! follow the scheme exactly (night-vision in particular may only ever emit
//! red light).

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Style for the main screen background.
pub fn surface(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Style for raised panels (form, chart, timeline cards).
pub fn panel(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the warning banner.
pub fn banner(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.warning;
    let text = colors.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Primary action button (start/finish feed, selected options).
pub fn primary_button(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.brand_primary;
    let active = colors.brand_secondary;
    let text = colors.surface_primary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => active,
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Secondary button (navigation, unselected options).
pub fn subtle_button(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.surface_tertiary;
    let hover = colors.surface_secondary;
    let text = colors.text_primary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
