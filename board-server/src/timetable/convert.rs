//! Conversion from raw rows to validated domain records.
//!
//! Conversion is all-or-nothing: one malformed row rejects the whole table,
//! so the board only ever operates on fully valid data.

use crate::domain::{BoardTime, TimeError, TrainRecord, TrainType};

use super::types::RawTrainRow;

/// Error converting a raw row into a [`TrainRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The Time column did not hold a valid "HH:MM" value.
    #[error("row {row}: bad time {value:?}: {source}")]
    InvalidTime {
        row: usize,
        value: String,
        source: TimeError,
    },

    /// The Carriages column held something other than a positive integer.
    #[error("row {row}: bad carriage count {value:?}")]
    InvalidCarriages { row: usize, value: String },
}

/// Convert a whole table, rejecting it on the first malformed row.
pub fn convert_table(rows: &[RawTrainRow]) -> Result<Vec<TrainRecord>, ConversionError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| convert_row(row, index))
        .collect()
}

fn convert_row(row: &RawTrainRow, index: usize) -> Result<TrainRecord, ConversionError> {
    let scheduled_time =
        BoardTime::parse_hhmm(row.time.trim()).map_err(|source| ConversionError::InvalidTime {
            row: index,
            value: row.time.clone(),
            source,
        })?;

    let carriages = row.carriages.trim();
    let carriage_count = if carriages.is_empty() {
        None
    } else {
        match carriages.parse::<u32>() {
            Ok(count) if count > 0 => Some(count),
            _ => {
                return Err(ConversionError::InvalidCarriages {
                    row: index,
                    value: row.carriages.clone(),
                });
            }
        }
    };

    let remark = if row.information.is_empty() {
        None
    } else {
        Some(row.information.clone())
    };

    Ok(TrainRecord {
        id: row.id.clone(),
        scheduled_time,
        train_type: TrainType::from_code(row.type_code.trim()),
        destination: row.destination.clone(),
        carriage_count,
        platform: row.platform.clone(),
        remark,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(time: &str, type_code: &str, carriages: &str, information: &str) -> RawTrainRow {
        RawTrainRow {
            id: "2841M".to_string(),
            time: time.to_string(),
            type_code: type_code.to_string(),
            destination: "Oita".to_string(),
            carriages: carriages.to_string(),
            platform: "1".to_string(),
            information: information.to_string(),
        }
    }

    #[test]
    fn converts_full_row() {
        let rows = vec![raw_row("08:00", "1", "4", "Extra carriages today")];
        let records = convert_table(&rows).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, "2841M");
        assert_eq!(record.scheduled_time.to_string(), "08:00");
        assert_eq!(record.train_type, TrainType::Rapid);
        assert_eq!(record.destination, "Oita");
        assert_eq!(record.carriage_count, Some(4));
        assert_eq!(record.platform, "1");
        assert_eq!(record.remark.as_deref(), Some("Extra carriages today"));
    }

    #[test]
    fn bad_time_rejects_whole_table() {
        let rows = vec![
            raw_row("08:00", "0", "4", ""),
            raw_row("8:10", "0", "4", ""),
            raw_row("08:20", "0", "4", ""),
        ];
        let err = convert_table(&rows).unwrap_err();

        assert!(matches!(err, ConversionError::InvalidTime { row: 1, .. }));
    }

    #[test]
    fn padded_time_is_accepted() {
        let rows = vec![raw_row(" 08:00 ", "0", "", "")];
        let records = convert_table(&rows).unwrap();

        assert_eq!(records[0].scheduled_time.to_string(), "08:00");
    }

    #[test]
    fn empty_carriages_is_none() {
        let rows = vec![raw_row("08:00", "0", "", "")];
        let records = convert_table(&rows).unwrap();

        assert_eq!(records[0].carriage_count, None);
    }

    #[test]
    fn zero_carriages_is_rejected() {
        let rows = vec![raw_row("08:00", "0", "0", "")];
        let err = convert_table(&rows).unwrap_err();

        assert!(matches!(err, ConversionError::InvalidCarriages { row: 0, .. }));
    }

    #[test]
    fn non_numeric_carriages_is_rejected() {
        let rows = vec![raw_row("08:00", "0", "four", "")];

        assert!(convert_table(&rows).is_err());
    }

    #[test]
    fn empty_information_is_none() {
        let rows = vec![raw_row("08:00", "0", "4", "")];
        let records = convert_table(&rows).unwrap();

        assert_eq!(records[0].remark, None);
    }

    #[test]
    fn unknown_type_code_converts() {
        let rows = vec![raw_row("08:00", "7", "4", "")];
        let records = convert_table(&rows).unwrap();

        assert_eq!(records[0].train_type, TrainType::Unknown);
    }

    #[test]
    fn pass_through_code_converts() {
        let rows = vec![raw_row("08:00", "20", "", "Limited express passing")];
        let records = convert_table(&rows).unwrap();

        assert_eq!(records[0].train_type, TrainType::PassThrough);
        assert_eq!(records[0].remark.as_deref(), Some("Limited express passing"));
    }

    #[test]
    fn empty_table_converts() {
        let records = convert_table(&[]).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn error_display() {
        let rows = vec![raw_row("25:00", "0", "4", "")];
        let err = convert_table(&rows).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("row 0"));
        assert!(message.contains("25:00"));
    }
}
