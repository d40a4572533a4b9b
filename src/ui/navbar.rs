// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the theme toggles and screen navigation.
//!
//! The two theme buttons mirror the keyboard shortcuts (`d`, `n`): one flips
//! day/night, the other enters or leaves night-vision. Both toggles are also
//! reachable mid-feed, since that is exactly when night-vision matters.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub theme_mode: ThemeMode,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDayNight,
    ToggleNightVision,
    OpenTracker,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ToggleDayNight,
    ToggleNightVision,
    OpenTracker,
    OpenSettings,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleDayNight => Event::ToggleDayNight,
        Message::ToggleNightVision => Event::ToggleNightVision,
        Message::OpenTracker => Event::OpenTracker,
        Message::OpenSettings => Event::OpenSettings,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_SM);

    let day_night = button(Text::new(ctx.i18n.tr("navbar-theme-toggle")))
        .on_press(Message::ToggleDayNight)
        .style(styles::subtle_button(&ctx.colors));

    // Highlighted while active so the current mode is visible at a glance.
    let night_vision_label = Text::new(ctx.i18n.tr("navbar-night-vision-toggle"));
    let night_vision = if ctx.theme_mode == ThemeMode::NightVision {
        button(night_vision_label)
            .on_press(Message::ToggleNightVision)
            .style(styles::primary_button(&ctx.colors))
    } else {
        button(night_vision_label)
            .on_press(Message::ToggleNightVision)
            .style(styles::subtle_button(&ctx.colors))
    };

    let screen_button = match ctx.screen {
        Screen::Tracker => button(Text::new(ctx.i18n.tr("navbar-settings-button")))
            .on_press(Message::OpenSettings)
            .style(styles::subtle_button(&ctx.colors)),
        Screen::Settings => button(Text::new(ctx.i18n.tr("navbar-tracker-button")))
            .on_press(Message::OpenTracker)
            .style(styles::subtle_button(&ctx.colors)),
    };

    let row = Row::new()
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(day_night)
        .push(night_vision)
        .push(screen_button)
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center);

    container(row)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .style(styles::panel(&ctx.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert!(matches!(
            update(Message::ToggleDayNight),
            Event::ToggleDayNight
        ));
        assert!(matches!(
            update(Message::ToggleNightVision),
            Event::ToggleNightVision
        ));
        assert!(matches!(update(Message::OpenSettings), Event::OpenSettings));
        assert!(matches!(update(Message::OpenTracker), Event::OpenTracker));
    }
}
