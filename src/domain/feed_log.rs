// SPDX-License-Identifier: MPL-2.0
//! Feeding-event records and the aggregations derived from them.
//!
//! A [`FeedLog`] describes one completed feed: when it started and ended,
//! how much milk was prepared, and (when the bottle was weighed afterwards)
//! how much was left. The chart and timeline consume ordered slices of these
//! records; [`daily_totals`] provides the per-day buckets used by the chart.

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// What kind of feed a record describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeedKind {
    #[default]
    Bottle,
    Nursing,
    Solids,
}

impl FeedKind {
    /// All kinds in display order.
    pub const ALL: [FeedKind; 3] = [FeedKind::Bottle, FeedKind::Nursing, FeedKind::Solids];

    /// Fluent key for the localized kind label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            FeedKind::Bottle => "feed-kind-bottle",
            FeedKind::Nursing => "feed-kind-nursing",
            FeedKind::Solids => "feed-kind-solids",
        }
    }
}

/// One completed feeding event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedLog {
    /// Stable identifier, derived from the start timestamp.
    pub id: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Stored explicitly so imported records keep their original value even
    /// when it disagrees slightly with `end - start`.
    pub duration_secs: i64,
    /// Milk prepared for this feed, in millilitres.
    pub bottle_size_ml: f32,
    /// Milk left in the bottle, in millilitres. `None` when the bottle was
    /// not weighed after the feed.
    #[serde(default)]
    pub milk_left_ml: Option<f32>,
    #[serde(default)]
    pub kind: FeedKind,
}

impl FeedLog {
    /// Builds a record from a start/end pair, deriving id and duration.
    pub fn new(
        start: DateTime<Local>,
        end: DateTime<Local>,
        bottle_size_ml: f32,
        milk_left_ml: Option<f32>,
        kind: FeedKind,
    ) -> Self {
        Self {
            id: format!("feed-{}", start.timestamp_millis()),
            start,
            end,
            duration_secs: (end - start).num_seconds().max(0),
            bottle_size_ml,
            milk_left_ml,
            kind,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_secs)
    }

    /// Millilitres actually consumed. Without a leftover measurement the
    /// whole bottle counts; a leftover larger than the bottle clamps to zero.
    pub fn consumed_ml(&self) -> f32 {
        match self.milk_left_ml {
            Some(left) => (self.bottle_size_ml - left).max(0.0),
            None => self.bottle_size_ml,
        }
    }

    /// Local calendar day the feed started on.
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// Sorts feeds chronologically by start time (stable for equal starts).
pub fn sort_by_start(feeds: &mut [FeedLog]) {
    feeds.sort_by_key(|feed| feed.start);
}

/// Sums consumed millilitres per local calendar day, oldest day first.
///
/// The input does not need to be sorted; the output always is. Days without
/// feeds do not appear.
pub fn daily_totals(feeds: &[FeedLog]) -> Vec<(NaiveDate, f32)> {
    let mut totals: Vec<(NaiveDate, f32)> = Vec::new();
    for feed in feeds {
        let day = feed.day();
        match totals.iter_mut().find(|(d, _)| *d == day) {
            Some((_, total)) => *total += feed.consumed_ml(),
            None => totals.push((day, feed.consumed_ml())),
        }
    }
    totals.sort_by_key(|(day, _)| *day);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn feed_at(day: u32, hour: u32, bottle: f32, left: Option<f32>) -> FeedLog {
        let start = Local.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap();
        let end = start + Duration::minutes(20);
        FeedLog::new(start, end, bottle, left, FeedKind::Bottle)
    }

    #[test]
    fn new_derives_id_from_start_timestamp() {
        let feed = feed_at(1, 3, 120.0, None);
        assert_eq!(
            feed.id,
            format!("feed-{}", feed.start.timestamp_millis())
        );
    }

    #[test]
    fn new_derives_duration_from_bounds() {
        let feed = feed_at(1, 3, 120.0, None);
        assert_eq!(feed.duration_secs, 20 * 60);
        assert_eq!(feed.duration(), Duration::minutes(20));
    }

    #[test]
    fn new_clamps_negative_duration_to_zero() {
        let start = Local.with_ymd_and_hms(2026, 3, 1, 3, 0, 0).unwrap();
        let end = start - Duration::minutes(5);
        let feed = FeedLog::new(start, end, 90.0, None, FeedKind::Bottle);
        assert_eq!(feed.duration_secs, 0);
    }

    #[test]
    fn consumed_subtracts_leftover() {
        let feed = feed_at(1, 3, 120.0, Some(30.0));
        assert!((feed.consumed_ml() - 90.0).abs() < f32::EPSILON);
    }

    #[test]
    fn consumed_without_leftover_counts_whole_bottle() {
        let feed = feed_at(1, 3, 120.0, None);
        assert!((feed.consumed_ml() - 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn consumed_is_never_negative() {
        let feed = feed_at(1, 3, 60.0, Some(100.0));
        assert_eq!(feed.consumed_ml(), 0.0);
    }

    #[test]
    fn sort_by_start_orders_chronologically() {
        let mut feeds = vec![feed_at(2, 6, 100.0, None), feed_at(1, 22, 100.0, None)];
        sort_by_start(&mut feeds);
        assert!(feeds[0].start < feeds[1].start);
    }

    #[test]
    fn daily_totals_buckets_by_local_day() {
        let feeds = vec![
            feed_at(1, 3, 120.0, Some(20.0)),  // 100 on day 1
            feed_at(1, 22, 90.0, None),        // +90 on day 1
            feed_at(2, 6, 150.0, Some(50.0)),  // 100 on day 2
        ];
        let totals = daily_totals(&feeds);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].0, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert!((totals[0].1 - 190.0).abs() < 0.001);
        assert!((totals[1].1 - 100.0).abs() < 0.001);
    }

    #[test]
    fn daily_totals_sorts_even_unsorted_input() {
        let feeds = vec![feed_at(5, 8, 100.0, None), feed_at(3, 8, 100.0, None)];
        let totals = daily_totals(&feeds);
        assert!(totals[0].0 < totals[1].0);
    }

    #[test]
    fn feed_kind_serializes_kebab_case() {
        let mut feed = feed_at(1, 3, 100.0, None);
        feed.kind = FeedKind::Nursing;
        let doc = toml::to_string(&feed).expect("serialize feed");
        assert!(doc.contains("kind = \"nursing\""), "got: {doc}");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let doc = r#"
            id = "feed-1"
            start = "2026-03-01T03:00:00+01:00"
            end = "2026-03-01T03:20:00+01:00"
            duration_secs = 1200
            bottle_size_ml = 120.0
        "#;
        let feed: FeedLog = toml::from_str(doc).expect("deserialize feed");
        assert_eq!(feed.milk_left_ml, None);
        assert_eq!(feed.kind, FeedKind::Bottle);
    }
}
