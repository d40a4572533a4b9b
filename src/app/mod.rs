// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the tracker and settings
//! screens.
//!
//! The `App` struct wires together the domains (feed history, localization,
//! theming) and translates messages into side effects like config persistence
//! or store writes. Policy decisions (window sizing, restore order, the
//! write-on-every-toggle rule) stay close to the main update loop so
//! user-facing behavior is easy to audit.

pub mod config;
mod feed_store;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use feed_store::FeedStore;
pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::ui::feed_chart;
use crate::ui::feed_form;
use crate::ui::notifications;
use crate::ui::theming::{self, ThemeMode};
use crate::ui::timeline;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization, and
/// persisted data.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    feed_form: feed_form::State,
    chart: feed_chart::State,
    timeline: timeline::State,
    store: FeedStore,
    /// Warning banners for config/store problems.
    notifications: notifications::Manager,
    /// Explicit data directory, set by tests; `None` uses standard resolution.
    data_dir_override: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("feeds", &self.store.feeds.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (App::new(flags), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted config and history.
    fn new(flags: Flags) -> Self {
        Self::new_with_dirs(flags, None, None)
    }

    /// Initializes application state with explicit directory overrides.
    ///
    /// `None` directories go through the standard resolution (CLI, env,
    /// platform default); tests pass temp directories instead.
    pub fn new_with_dirs(
        flags: Flags,
        config_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang, &config);

        // A persisted theme wins; otherwise the OS preference decides
        // between plain light and dark.
        let theme_mode =
            ThemeMode::restore(config.general.theme, theming::system_prefers_dark());

        let default_bottle_size = config
            .tracker
            .default_bottle_size_ml
            .unwrap_or(config::DEFAULT_BOTTLE_SIZE_ML);
        let chart_days = config
            .tracker
            .chart_days
            .unwrap_or(config::DEFAULT_CHART_DAYS);

        let (store, store_warning) = FeedStore::load_from(data_dir.clone());

        let mut app = App {
            i18n,
            screen: Screen::default(),
            theme_mode,
            feed_form: feed_form::State::new(default_bottle_size),
            chart: feed_chart::State::new(chart_days),
            timeline: timeline::State::new(),
            store,
            notifications: notifications::Manager::new(),
            data_dir_override: data_dir,
        };

        // Derive both consumers from the loaded history.
        {
            use crate::domain::{FeedChartView, TimelineView};
            app.chart.update_feed_chart(&app.store.feeds);
            app.timeline.update_timeline(&app.store.feeds);
        }

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = store_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        app
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// Whether anything on screen currently depends on wall-clock time.
    pub(crate) fn needs_clock(&self) -> bool {
        self.feed_form.is_active() || !self.notifications.is_empty()
    }
}
