//! Raw timetable rows as they appear in the source tables.
//!
//! A table is CSV with a header row naming the columns `ID, Time, Type,
//! Destination, Carriages, Platform, Information`. Header names are trimmed
//! before use, so padded headers still bind.

use serde::Deserialize;

/// One row of a source table, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTrainRow {
    #[serde(rename = "ID")]
    pub id: String,

    /// Scheduled time as an "HH:MM" string.
    #[serde(rename = "Time")]
    pub time: String,

    /// Numeric type code, decoded later.
    #[serde(rename = "Type")]
    pub type_code: String,

    #[serde(rename = "Destination")]
    pub destination: String,

    /// Carriage count; empty when unknown.
    #[serde(rename = "Carriages", default)]
    pub carriages: String,

    #[serde(rename = "Platform")]
    pub platform: String,

    /// Informational remark; empty when there is none.
    #[serde(rename = "Information", default)]
    pub information: String,
}

/// Read the raw rows out of CSV text.
///
/// Empty lines are skipped; a structurally malformed table fails as a whole.
pub fn read_rows(csv_text: &str) -> Result<Vec<RawTrainRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(csv_text.as_bytes());

    reader.deserialize().collect()
}
