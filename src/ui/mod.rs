// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! module exposes a `Message` enum, an `update` that turns messages into
//! `Event`s for the parent, and a `view` fed through a `ViewContext`.
//!
//! - [`navbar`] - Top bar with theme toggles and screen navigation
//! - [`feed_form`] - Start/finish a feed, capture bottle size and leftovers
//! - [`feed_chart`] - Per-day intake bar chart (canvas)
//! - [`timeline`] - Chronological feed history grouped by day
//! - [`settings`] - Theme and language preferences
//! - [`notifications`] - Transient warning banners
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/NightVision theme mode management
//! - [`styles`] - Shared container and button styling helpers

pub mod design_tokens;
pub mod feed_chart;
pub mod feed_form;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod timeline;
