// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::feed_form;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::timeline;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    FeedForm(feed_form::Message),
    Timeline(timeline::Message),
    Settings(settings::Message),
    Notification(notifications::Message),
    /// Periodic tick driving the elapsed-feed display and banner expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `NIGHTFEED_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for the feed history).
    /// Takes precedence over the `NIGHTFEED_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
