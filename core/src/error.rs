use thiserror::Error;

/// Failures raised by the data layer.
///
/// Both variants indicate a problem with stored data rather than with
/// user input: keys are normally produced by `datekey::format_key`, and
/// activity records are validated when the store is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A date key did not match the `DD-MM-YYYY` shape or named an
    /// impossible calendar date.
    #[error("invalid date key '{0}': expected DD-MM-YYYY")]
    InvalidDateKey(String),

    /// A raw activity record carried zero or multiple labels. Each
    /// record must hold exactly one label/value pair; guessing which
    /// label was meant could hide data corruption.
    #[error("malformed activity record under '{key}': expected exactly 1 label, found {labels}")]
    MalformedRecord { key: String, labels: usize },
}
