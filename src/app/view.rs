// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the pending warning banners, and the active screen,
//! all inside a surface container driven by the current color scheme.

use super::{App, Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{feed_chart, feed_form, navbar, settings, timeline};
use iced::widget::{container, Column};
use iced::{Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let colors = app.theme_mode.colors();

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        colors,
        theme_mode: app.theme_mode,
        screen: app.screen,
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view).spacing(spacing::SM);

    if !app.notifications.is_empty() {
        column = column.push(
            app.notifications
                .view(&app.i18n, &colors)
                .map(Message::Notification),
        );
    }

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Tracker => view_tracker(app, colors),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            colors,
            theme_mode: app.theme_mode,
        })
        .map(Message::Settings),
    };
    column = column.push(screen_view);

    container(column.width(Length::Fill).height(Length::Fill))
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::surface(&colors))
        .into()
}

fn view_tracker(app: &App, colors: ColorScheme) -> Element<'_, Message> {
    let form = feed_form::view(feed_form::ViewContext {
        i18n: &app.i18n,
        colors,
        state: &app.feed_form,
    })
    .map(Message::FeedForm);

    let chart = feed_chart::view(&app.chart, &app.i18n, colors);

    let history = timeline::view(timeline::ViewContext {
        i18n: &app.i18n,
        colors,
        state: &app.timeline,
    })
    .map(Message::Timeline);

    Column::new()
        .push(form)
        .push(chart)
        .push(history)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
