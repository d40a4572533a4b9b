// SPDX-License-Identifier: MPL-2.0
//! Core domain types shared by the UI and persistence layers.

pub mod feed_log;

pub use feed_log::{FeedKind, FeedLog};

/// Capability implemented by the intake chart: re-derive its rendering state
/// from the full ordered sequence of prior feeds.
pub trait FeedChartView {
    fn update_feed_chart(&mut self, feeds: &[FeedLog]);
}

/// Capability implemented by the timeline: re-derive its rendering state from
/// the full ordered sequence of prior feeds.
pub trait TimelineView {
    fn update_timeline(&mut self, feeds: &[FeedLog]);
}
