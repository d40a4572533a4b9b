// SPDX-License-Identifier: MPL-2.0
//! `nightfeed` is a bottle-feeding tracker built with the Iced GUI framework.
//!
//! It records feeding events, renders them as a per-day intake chart and a
//! chronological timeline, and offers a night-vision theme (red on black) so
//! the screen can be checked during night feeds without losing dark
//! adaptation. Preferences are persisted to a TOML file, the feed history to
//! a CBOR file, and all user-facing text goes through Fluent localization.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
