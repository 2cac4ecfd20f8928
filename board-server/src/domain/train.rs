//! Train records and type codes.

use std::fmt;

use super::time::BoardTime;

/// Train type, decoded from the numeric code in the source tables.
///
/// Codes map as `0` normal, `1` rapid, `2` express, `3` limited express and
/// `20` pass-through. Anything else decodes to [`TrainType::Unknown`] rather
/// than failing, so an unexpected code degrades to a displayable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainType {
    Normal,
    Rapid,
    Express,
    LimitedExpress,
    /// Does not stop at this station.
    PassThrough,
    Unknown,
}

impl TrainType {
    /// Decode a raw type code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => TrainType::Normal,
            "1" => TrainType::Rapid,
            "2" => TrainType::Express,
            "3" => TrainType::LimitedExpress,
            "20" => TrainType::PassThrough,
            _ => TrainType::Unknown,
        }
    }

    /// Label shown in the type column of the board.
    pub fn label(&self) -> &'static str {
        match self {
            TrainType::Normal => "Normal",
            TrainType::Rapid => "Rapid",
            TrainType::Express => "Express",
            TrainType::LimitedExpress => "Limited Express",
            TrainType::PassThrough => "Pass-through",
            TrainType::Unknown => "Unknown",
        }
    }

    /// Whether this train does not call at the station.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, TrainType::PassThrough)
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scheduled departure entry.
///
/// Constructed once when a timetable is loaded and never mutated. The
/// scheduled time is a validated wall-clock time; the optional fields map
/// empty source columns to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRecord {
    /// Service identifier from the source table.
    pub id: String,
    /// Scheduled departure (or passing) time.
    pub scheduled_time: BoardTime,
    pub train_type: TrainType,
    pub destination: String,
    /// Number of carriages, when known. Always positive.
    pub carriage_count: Option<u32>,
    pub platform: String,
    /// Rotating informational text shown in the remark carousel.
    pub remark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_code_mapping() {
        assert_eq!(TrainType::from_code("0"), TrainType::Normal);
        assert_eq!(TrainType::from_code("1"), TrainType::Rapid);
        assert_eq!(TrainType::from_code("2"), TrainType::Express);
        assert_eq!(TrainType::from_code("3"), TrainType::LimitedExpress);
        assert_eq!(TrainType::from_code("20"), TrainType::PassThrough);
    }

    #[test]
    fn unrecognized_codes_are_unknown() {
        assert_eq!(TrainType::from_code("4"), TrainType::Unknown);
        assert_eq!(TrainType::from_code("21"), TrainType::Unknown);
        assert_eq!(TrainType::from_code(""), TrainType::Unknown);
        assert_eq!(TrainType::from_code("rapid"), TrainType::Unknown);
    }

    #[test]
    fn labels() {
        assert_eq!(TrainType::Normal.label(), "Normal");
        assert_eq!(TrainType::Rapid.label(), "Rapid");
        assert_eq!(TrainType::Express.label(), "Express");
        assert_eq!(TrainType::LimitedExpress.label(), "Limited Express");
        assert_eq!(TrainType::PassThrough.to_string(), "Pass-through");
        assert_eq!(TrainType::Unknown.label(), "Unknown");
    }

    #[test]
    fn pass_through_predicate() {
        assert!(TrainType::PassThrough.is_pass_through());
        assert!(!TrainType::Normal.is_pass_through());
        assert!(!TrainType::Unknown.is_pass_through());
    }
}
