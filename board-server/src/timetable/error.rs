//! Timetable loader error types.

use super::convert::ConversionError;

/// Errors from loading a timetable.
///
/// The first three variants are load failures (the source could not be
/// reached or read); the last two are parse failures (the source answered
/// with a malformed table).
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The source answered with a non-success status code.
    #[error("table {table}: unexpected status {status}")]
    Status { table: String, status: u16 },

    /// A local table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The CSV structure was malformed.
    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// A row failed validation; the whole table is rejected.
    #[error("malformed table: {0}")]
    Convert(#[from] ConversionError),
}

impl TimetableError {
    /// Whether this is a parse failure rather than a load failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TimetableError::Csv(_) | TimetableError::Convert(_))
    }
}
