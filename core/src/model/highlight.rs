use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display text attached to every highlight.
pub const HIGHLIGHT_TITLE: &str = "Data Available";

/// A calendar day that should be rendered as "has data".
///
/// This is a read-only projection of the activity store, one event per
/// stored key. It exists purely for the view layer; nothing in the core
/// mutates or stores these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighlightEvent {
    /// The store key the event was derived from.
    pub key: String,
    pub date: NaiveDate,
    pub title: String,
    pub has_data: bool,
}

impl HighlightEvent {
    pub fn new(key: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            key: key.into(),
            date,
            title: HIGHLIGHT_TITLE.to_string(),
            has_data: true,
        }
    }
}
