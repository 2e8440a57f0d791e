use chrono::NaiveDate;

use crate::chart;
use crate::datekey;
use crate::state::{ModalState, ViewState};
use crate::store::ActivityStore;

/// Orchestrates the "date selected" and "close" events.
///
/// Owns the read-only store; the view state it drives is owned by the
/// caller. Both transitions are total: they cannot fail, and replaying
/// the same selection leaves the state unchanged.
pub struct SelectionController {
    store: ActivityStore,
}

impl SelectionController {
    pub fn new(store: ActivityStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    /// Handle a date pick from the calendar (slot or highlight, the
    /// distinction does not matter here): record the selection, then
    /// open the modal with the date's chart series or as the empty
    /// state.
    pub fn select_date(&self, state: &mut ViewState, date: NaiveDate) {
        let key = datekey::format_key(date);
        state.selection.selected = Some(date);

        match self.store.entries_for(&key) {
            Some(entries) => {
                let series = chart::to_chart_series(Some(entries));
                log::debug!("date {key} selected, opening modal with {} bars", series.len());
                state.modal = ModalState::open_with(series);
            }
            None => {
                log::debug!("date {key} selected, no data recorded");
                state.modal = ModalState::open_empty();
            }
        }
    }

    /// Handle the modal's dismiss event. The last selection is kept so
    /// anything re-opening the modal later still has context.
    pub fn close_modal(&self, state: &mut ViewState) {
        state.modal = ModalState::closed();
    }
}
