use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One user's recorded activity on a date: a label and a count.
///
/// The source data stores these as single-key JSON objects like
/// `{"user_1": 10}`. We keep them as an explicit two-field record so
/// the rest of the code never has to ask "which key did you mean?".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub label: String,
    pub value: u64,
}

impl ActivityEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Convert a raw single-key record into a tagged entry.
    ///
    /// `key` is the date key the record was found under, used only for
    /// the error message. Records with zero or multiple labels are
    /// rejected rather than guessed at.
    pub fn from_record(key: &str, record: BTreeMap<String, u64>) -> Result<Self, DataError> {
        if record.len() != 1 {
            return Err(DataError::MalformedRecord {
                key: key.to_string(),
                labels: record.len(),
            });
        }
        let (label, value) = record.into_iter().next().unwrap();
        Ok(Self { label, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_single_label() {
        let mut record = BTreeMap::new();
        record.insert("user_1".to_string(), 10);
        let entry = ActivityEntry::from_record("01-12-2025", record).unwrap();
        assert_eq!(entry, ActivityEntry::new("user_1", 10));
    }

    #[test]
    fn test_from_record_rejects_empty_record() {
        let err = ActivityEntry::from_record("01-12-2025", BTreeMap::new()).unwrap_err();
        assert_eq!(
            err,
            DataError::MalformedRecord {
                key: "01-12-2025".to_string(),
                labels: 0,
            }
        );
    }

    #[test]
    fn test_from_record_rejects_multiple_labels() {
        let mut record = BTreeMap::new();
        record.insert("user_1".to_string(), 10);
        record.insert("user_2".to_string(), 15);
        let err = ActivityEntry::from_record("01-12-2025", record).unwrap_err();
        assert_eq!(
            err,
            DataError::MalformedRecord {
                key: "01-12-2025".to_string(),
                labels: 2,
            }
        );
    }
}
