use std::collections::BTreeMap;

use anyhow::Result;

use crate::datekey;
use crate::error::DataError;
use crate::model::activity::ActivityEntry;
use crate::model::highlight::HighlightEvent;

/// Immutable mapping from `DD-MM-YYYY` keys to recorded activity.
///
/// Built once at startup and read-only afterwards; refreshing the data
/// means building a new store. Absence of a key means "no data for
/// that date" and is always reported as `None`, never as an empty
/// sequence, so "present but empty" stays representable.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    data: BTreeMap<String, Vec<ActivityEntry>>,
}

impl ActivityStore {
    /// Build a store from already-validated entries. Used by tests and
    /// by anything constructing data programmatically.
    pub fn from_entries(data: BTreeMap<String, Vec<ActivityEntry>>) -> Self {
        Self { data }
    }

    /// Decode the JSON asset shape: an object mapping date keys to
    /// arrays of single-label records, e.g.
    /// `{"01-12-2025": [{"user_1": 10}, {"user_2": 15}]}`.
    ///
    /// Each record must carry exactly one label; anything else fails
    /// the load (see `DataError::MalformedRecord`).
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<BTreeMap<String, u64>>> = serde_json::from_str(json)?;

        let mut data = BTreeMap::new();
        for (key, records) in raw {
            let entries = records
                .into_iter()
                .map(|record| ActivityEntry::from_record(&key, record))
                .collect::<Result<Vec<_>, DataError>>()?;
            data.insert(key, entries);
        }
        Ok(Self { data })
    }

    pub fn has_data(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// The entries recorded under `key`, or `None` when the key is
    /// absent.
    pub fn entries_for(&self, key: &str) -> Option<&[ActivityEntry]> {
        self.data.get(key).map(|entries| entries.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Derive the highlight projection: one event per stored key,
    /// recomputed from scratch on every call.
    ///
    /// A key that fails to parse means the store holds corrupt data,
    /// so the error is propagated instead of skipping the key.
    pub fn highlight_events(&self) -> Result<Vec<HighlightEvent>, DataError> {
        self.data
            .keys()
            .map(|key| {
                let date = datekey::parse_key(key)?;
                Ok(HighlightEvent::new(key.clone(), date))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_store() -> ActivityStore {
        ActivityStore::from_json(
            r#"{
                "01-12-2025": [{"user_1": 10}, {"user_2": 15}],
                "05-12-2025": [{"user_3": 8}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_has_data_matches_keys() {
        let store = sample_store();
        assert!(store.has_data("01-12-2025"));
        assert!(store.has_data("05-12-2025"));
        assert!(!store.has_data("02-12-2025"));

        // has_data(k) holds exactly for the listed keys.
        for key in store.keys() {
            assert!(store.has_data(key));
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_absent_key_is_none_not_empty() {
        let store = sample_store();
        assert_eq!(store.entries_for("02-12-2025"), None);
    }

    #[test]
    fn test_entries_preserve_source_order() {
        let store = sample_store();
        let entries = store.entries_for("01-12-2025").unwrap();
        assert_eq!(
            entries,
            [
                ActivityEntry::new("user_1", 10),
                ActivityEntry::new("user_2", 15),
            ]
        );
    }

    #[test]
    fn test_present_but_empty_stays_distinguishable() {
        let store = ActivityStore::from_json(r#"{"03-12-2025": []}"#).unwrap();
        assert!(store.has_data("03-12-2025"));
        assert_eq!(store.entries_for("03-12-2025"), Some(&[][..]));
    }

    #[test]
    fn test_load_rejects_multi_label_record() {
        let result = ActivityStore::from_json(r#"{"01-12-2025": [{"a": 1, "b": 2}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_empty_record() {
        let result = ActivityStore::from_json(r#"{"01-12-2025": [{}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_highlight_events_cover_every_key() {
        let store = sample_store();
        let events = store.highlight_events().unwrap();
        assert_eq!(events.len(), store.len());

        let first = &events[0];
        assert_eq!(first.key, "01-12-2025");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert!(first.has_data);
    }

    #[test]
    fn test_highlight_events_surface_corrupt_keys() {
        let store = ActivityStore::from_json(r#"{"not-a-date": [{"a": 1}]}"#).unwrap();
        let err = store.highlight_events().unwrap_err();
        assert_eq!(err, DataError::InvalidDateKey("not-a-date".to_string()));
    }
}
