use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::ChartPoint;

/// The date the user last picked, if any.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<NaiveDate>,
}

/// Open/closed and content state of the detail modal.
///
/// Invariants, upheld by constructing only through the methods below:
/// a closed modal carries no content, and `has_data == false` implies
/// `chart_data` is `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub has_data: bool,
    pub chart_data: Option<Vec<ChartPoint>>,
}

impl ModalState {
    /// Open showing a chart series.
    pub fn open_with(series: Vec<ChartPoint>) -> Self {
        Self {
            is_open: true,
            has_data: true,
            chart_data: Some(series),
        }
    }

    /// Open showing the "no data" empty state.
    pub fn open_empty() -> Self {
        Self {
            is_open: true,
            has_data: false,
            chart_data: None,
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }
}

/// The shared view state the widgets render from.
///
/// Owned by the application entry point and handed to the controller
/// by mutable reference; no singleton, no interior mutability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selection: SelectionState,
    pub modal: ModalState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}
