use serde::{Deserialize, Serialize};

use crate::model::activity::ActivityEntry;

/// One bar of the activity chart, in the shape the chart widget
/// consumes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Shape stored entries into the chart series, preserving order.
///
/// Pass-through shaping only: no aggregation, no sorting, no range
/// checks. Absent or empty input yields an empty series; the modal
/// renders that as its empty state.
pub fn to_chart_series(entries: Option<&[ActivityEntry]>) -> Vec<ChartPoint> {
    entries
        .unwrap_or_default()
        .iter()
        .map(|entry| ChartPoint::new(entry.label.clone(), entry.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_yields_empty_series() {
        assert_eq!(to_chart_series(None), Vec::<ChartPoint>::new());
    }

    #[test]
    fn test_empty_yields_empty_series() {
        assert_eq!(to_chart_series(Some(&[])), Vec::<ChartPoint>::new());
    }

    #[test]
    fn test_order_is_preserved() {
        let entries = [
            ActivityEntry::new("a", 10),
            ActivityEntry::new("b", 15),
            ActivityEntry::new("c", 8),
        ];
        assert_eq!(
            to_chart_series(Some(&entries)),
            vec![
                ChartPoint::new("a", 10),
                ChartPoint::new("b", 15),
                ChartPoint::new("c", 8),
            ]
        );
    }
}
