//! Directory-backed timetable source.
//!
//! Reads tables from local CSV files named `{table}.csv`. This is the
//! development and test source; it applies exactly the same validation as
//! the HTTP source.

use std::path::PathBuf;

use crate::domain::TrainRecord;

use super::convert::convert_table;
use super::error::TimetableError;
use super::types::read_rows;

/// Timetable source reading tables from a local directory.
#[derive(Debug, Clone)]
pub struct FileTimetableSource {
    dir: PathBuf,
}

impl FileTimetableSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load and validate one table.
    pub fn load_table(&self, table: &str) -> Result<Vec<TrainRecord>, TimetableError> {
        let path = self.dir.join(format!("{table}.csv"));

        let text = std::fs::read_to_string(&path).map_err(|source| TimetableError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let rows = read_rows(&text)?;
        Ok(convert_table(&rows)?)
    }
}
