// SPDX-License-Identifier: MPL-2.0
//! Feed history persistence using CBOR format.
//!
//! The feed history persists across sessions but is not user-editable, so it
//! is stored apart from `settings.toml`, as compact CBOR in the app data
//! directory. Loading never panics: a missing file yields an empty history
//! and a corrupt one yields an empty history plus a warning key the UI can
//! surface.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with an explicit base directory override
//! 2. Set the `NIGHTFEED_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use super::paths;
use crate::domain::feed_log::{self, FeedLog};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Store file name within the app data directory.
const STORE_FILE: &str = "feeds.cbor";

/// The persisted feed history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedStore {
    /// All recorded feeds, kept ordered by start time.
    #[serde(default)]
    pub feeds: Vec<FeedLog>,
}

impl FeedStore {
    /// Loads the feed history from the default location.
    ///
    /// Returns a tuple of (store, optional_warning). If loading fails,
    /// returns an empty store with a warning key explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the feed history from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::store_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader::<Self, _>(reader) {
                    Ok(mut store) => {
                        // Order is an invariant downstream consumers rely on.
                        feed_log::sort_by_start(&mut store.feeds);
                        (store, None)
                    }
                    Err(_) => (
                        Self::default(),
                        Some("notification-store-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-store-read-error".to_string()),
            ),
        }
    }

    /// Saves the feed history to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the feed history to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::store_file_path_with_override(base_dir) else {
            return Some("notification-store-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-store-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-store-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-store-create-error".to_string()),
        }
    }

    /// Inserts a completed feed, keeping the history ordered by start time.
    pub fn push(&mut self, feed: FeedLog) {
        self.feeds.push(feed);
        feed_log::sort_by_start(&mut self.feeds);
    }

    /// Removes the feed with the given id. Returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.feeds.len();
        self.feeds.retain(|feed| feed.id != id);
        self.feeds.len() != before
    }

    fn store_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STORE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedKind;
    use chrono::{Duration, Local, TimeZone};
    use tempfile::tempdir;

    fn feed_at(hour: u32) -> FeedLog {
        let start = Local.with_ymd_and_hms(2026, 4, 2, hour, 0, 0).unwrap();
        FeedLog::new(
            start,
            start + Duration::minutes(15),
            120.0,
            Some(10.0),
            FeedKind::Bottle,
        )
    }

    #[test]
    fn default_store_is_empty() {
        assert!(FeedStore::default().feeds.is_empty());
    }

    #[test]
    fn push_keeps_feeds_ordered() {
        let mut store = FeedStore::default();
        store.push(feed_at(8));
        store.push(feed_at(3));
        assert!(store.feeds[0].start < store.feeds[1].start);
    }

    #[test]
    fn remove_by_id() {
        let mut store = FeedStore::default();
        let feed = feed_at(3);
        let id = feed.id.clone();
        store.push(feed);

        assert!(store.remove(&id));
        assert!(store.feeds.is_empty());
        assert!(!store.remove(&id));
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut original = FeedStore::default();
        original.push(feed_at(3));
        original.push(feed_at(6));

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");
        assert!(base_dir.join(STORE_FILE).exists());

        let (loaded, warning) = FeedStore::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (store, warning) = FeedStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(store, FeedStore::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let store_path = base_dir.join(STORE_FILE);
        fs::write(&store_path, "not valid cbor data").expect("write file");

        let (store, warning) = FeedStore::load_from(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-store-parse-error"),
            "should warn about parse error"
        );
        assert_eq!(store, FeedStore::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let store = FeedStore::default();
        let result = store.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STORE_FILE).exists());
    }

    #[test]
    fn load_sorts_unordered_history() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        // Write a store with feeds deliberately out of order.
        let unordered = FeedStore {
            feeds: vec![feed_at(9), feed_at(1)],
        };
        let file = fs::File::create(base_dir.join(STORE_FILE)).expect("create file");
        ciborium::into_writer(&unordered, BufWriter::new(file)).expect("write cbor");

        let (loaded, _) = FeedStore::load_from(Some(base_dir));
        assert!(loaded.feeds[0].start < loaded.feeds[1].start);
    }
}
