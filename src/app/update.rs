// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every feed mutation ends in [`App::sync_views_and_save`], which pushes
//! the full ordered history into the chart and timeline consumers and writes
//! the store to disk. Every theme change ends in a config write.

use super::{persistence, App, Message, Screen};
use crate::domain::{FeedChartView, TimelineView};
use crate::ui::notifications::Notification;
use crate::ui::theming::ThemeMode;
use crate::ui::{feed_form, navbar, settings, timeline};
use iced::Task;

/// Central update entrypoint.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(app, navbar::update(message)),
        Message::FeedForm(message) => {
            let event = feed_form::update(&mut app.feed_form, message);
            handle_feed_form(app, event)
        }
        Message::Timeline(message) => handle_timeline(app, timeline::update(message)),
        Message::Settings(message) => handle_settings(app, settings::update(message)),
        Message::Notification(message) => {
            app.notifications.update(message);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            if app.feed_form.is_active() {
                let _ = feed_form::update(
                    &mut app.feed_form,
                    feed_form::Message::Now(chrono::Local::now()),
                );
            }
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, event: navbar::Event) -> Task<Message> {
    match event {
        navbar::Event::ToggleDayNight => {
            app.apply_theme(app.theme_mode.toggle_day_night());
        }
        navbar::Event::ToggleNightVision => {
            app.apply_theme(app.theme_mode.toggle_night_vision());
        }
        navbar::Event::OpenTracker => app.screen = Screen::Tracker,
        navbar::Event::OpenSettings => app.screen = Screen::Settings,
    }
    Task::none()
}

fn handle_feed_form(app: &mut App, event: feed_form::Event) -> Task<Message> {
    match event {
        feed_form::Event::None => {}
        feed_form::Event::Completed(feed) => {
            app.store.push(feed);
            app.sync_views_and_save();
        }
    }
    Task::none()
}

fn handle_timeline(app: &mut App, event: timeline::Event) -> Task<Message> {
    match event {
        timeline::Event::Delete(id) => {
            if app.store.remove(&id) {
                app.sync_views_and_save();
            }
        }
    }
    Task::none()
}

fn handle_settings(app: &mut App, event: settings::Event) -> Task<Message> {
    match event {
        settings::Event::ThemeSelected(mode) => app.apply_theme(mode),
        settings::Event::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            persistence::persist_language(&locale);
        }
    }
    Task::none()
}

impl App {
    /// Switches the theme and persists the choice immediately.
    pub(super) fn apply_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        persistence::persist_theme(mode);
    }

    /// Pushes the current history into both consumers and saves the store.
    pub(super) fn sync_views_and_save(&mut self) {
        self.chart.update_feed_chart(&self.store.feeds);
        self.timeline.update_timeline(&self.store.feeds);

        if let Some(warning) = self.store.save_to(self.data_dir_override.clone()) {
            self.notifications.push(Notification::warning(&warning));
        }
    }
}
