// SPDX-License-Identifier: MPL-2.0
//! Settings screen: theme and language preferences.
//!
//! Both choices persist immediately; there is no apply/cancel step.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
}

/// Process a settings message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ThemeSelected(mode) => Event::ThemeSelected(mode),
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub theme_mode: ThemeMode,
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::NightVision] {
        let label = Text::new(ctx.i18n.tr(mode.i18n_key()));
        let styled = if mode == ctx.theme_mode {
            button(label).style(styles::primary_button(&ctx.colors))
        } else {
            button(label).style(styles::subtle_button(&ctx.colors))
        };
        theme_row = theme_row.push(styled.on_press(Message::ThemeSelected(mode)));
    }

    let theme_section = Column::new()
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_SM))
        .push(theme_row)
        .spacing(spacing::XS);

    let mut language_column = Column::new()
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::TITLE_SM))
        .spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = ctx.i18n.current_locale() == locale;
        let styled = if is_current_locale {
            button(Text::new(button_text)).style(styles::primary_button(&ctx.colors))
        } else {
            button(Text::new(button_text)).style(styles::subtle_button(&ctx.colors))
        };

        language_column =
            language_column.push(styled.on_press(Message::LanguageSelected(locale.clone())));
    }

    Column::new()
        .push(title)
        .push(theme_section)
        .push(language_column)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
