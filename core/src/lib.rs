pub mod chart;
pub mod controller;
pub mod datekey;
pub mod error;
pub mod model;
pub mod state;
pub mod store;

pub use chart::{to_chart_series, ChartPoint};
pub use controller::SelectionController;
pub use datekey::{format_key, parse_key, parse_key_opt};
pub use error::DataError;
pub use model::activity::ActivityEntry;
pub use model::highlight::{HighlightEvent, HIGHLIGHT_TITLE};
pub use state::{ModalState, SelectionState, ViewState};
pub use store::ActivityStore;
