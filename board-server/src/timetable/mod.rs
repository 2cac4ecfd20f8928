//! Timetable loading.
//!
//! A timetable source yields the full, validated table for a named
//! direction or fails with a [`TimetableError`]. Malformed rows reject the
//! whole table, so the board only ever sees valid records. Tables are
//! static: they are fetched once at startup, not polled.

mod client;
mod convert;
mod error;
mod file;
mod types;

pub use client::{TimetableClient, TimetableConfig};
pub use convert::{ConversionError, convert_table};
pub use error::TimetableError;
pub use file::FileTimetableSource;
pub use types::{RawTrainRow, read_rows};

use crate::domain::TrainRecord;

/// A configured timetable source.
#[derive(Debug, Clone)]
pub enum TimetableSource {
    /// Tables fetched over HTTP from a base URL.
    Http(TimetableClient),
    /// Tables read from a local directory.
    Files(FileTimetableSource),
}

impl TimetableSource {
    /// Load and validate one table from whichever backend is configured.
    pub async fn load_table(&self, table: &str) -> Result<Vec<TrainRecord>, TimetableError> {
        match self {
            TimetableSource::Http(client) => client.fetch_table(table).await,
            TimetableSource::Files(files) => files.load_table(table),
        }
    }
}
