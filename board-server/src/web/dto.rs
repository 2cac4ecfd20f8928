//! Data transfer objects for the JSON surface.

use serde::{Deserialize, Serialize};

use crate::board::DirectionWindow;
use crate::domain::TrainRecord;

/// Query parameters accepted by the board page.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Overrides the configured default for the on-time notice.
    pub on_time: Option<bool>,
}

/// Current board state.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub station: String,
    pub line: String,

    /// Wall-clock time the snapshot was computed at.
    pub computed_at: String,

    pub directions: Vec<DirectionResult>,
}

/// One direction on the board.
#[derive(Debug, Serialize)]
pub struct DirectionResult {
    pub key: String,
    pub title: String,

    /// Load failure, present instead of departures.
    pub error: Option<String>,

    pub departures: Vec<DepartureResult>,
}

impl DirectionResult {
    /// Create from a direction's current window.
    pub fn from_window(window: &DirectionWindow) -> Self {
        Self {
            key: window.direction.key.clone(),
            title: window.direction.title.clone(),
            error: window.error.clone(),
            departures: window
                .window
                .iter()
                .map(DepartureResult::from_record)
                .collect(),
        }
    }
}

/// One departure in a direction.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    pub id: String,

    /// Scheduled time as "HH:MM".
    pub time: String,

    pub train_type: String,
    pub destination: String,
    pub carriages: Option<u32>,
    pub platform: String,
    pub remark: Option<String>,
}

impl DepartureResult {
    /// Create from a domain record.
    pub fn from_record(record: &TrainRecord) -> Self {
        Self {
            id: record.id.clone(),
            time: record.scheduled_time.to_string(),
            train_type: record.train_type.label().to_string(),
            destination: record.destination.clone(),
            carriages: record.carriage_count,
            platform: record.platform.clone(),
            remark: record.remark.clone(),
        }
    }
}

/// Error body returned by failing endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoardTime, Direction, TrainType};

    fn make_record() -> TrainRecord {
        TrainRecord {
            id: "5001M".to_string(),
            scheduled_time: BoardTime::from_hm(8, 12).unwrap(),
            train_type: TrainType::LimitedExpress,
            destination: "Hakata".to_string(),
            carriage_count: Some(6),
            platform: "2".to_string(),
            remark: Some("Sonic 5".to_string()),
        }
    }

    #[test]
    fn departure_result_from_record() {
        let result = DepartureResult::from_record(&make_record());

        assert_eq!(result.id, "5001M");
        assert_eq!(result.time, "08:12");
        assert_eq!(result.train_type, "Limited Express");
        assert_eq!(result.destination, "Hakata");
        assert_eq!(result.carriages, Some(6));
        assert_eq!(result.platform, "2");
        assert_eq!(result.remark.as_deref(), Some("Sonic 5"));
    }

    #[test]
    fn direction_result_from_window() {
        let window = DirectionWindow {
            direction: Direction::new("up", "Up: for Oita and Nakatsu", "UpTrains"),
            window: vec![make_record()],
            error: None,
        };

        let result = DirectionResult::from_window(&window);

        assert_eq!(result.key, "up");
        assert_eq!(result.title, "Up: for Oita and Nakatsu");
        assert!(result.error.is_none());
        assert_eq!(result.departures.len(), 1);
    }

    #[test]
    fn direction_result_with_error() {
        let window = DirectionWindow {
            direction: Direction::new("down", "Down: for Usuki and Saiki", "DownTrains"),
            window: Vec::new(),
            error: Some("failed to read DownTrains.csv".to_string()),
        };

        let result = DirectionResult::from_window(&window);

        assert_eq!(result.error.as_deref(), Some("failed to read DownTrains.csv"));
        assert!(result.departures.is_empty());
    }

    #[test]
    fn board_response_serializes() {
        let response = BoardResponse {
            station: "Takajo Station".to_string(),
            line: "Nippo Main Line".to_string(),
            computed_at: "08:05:00".to_string(),
            directions: Vec::new(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"station\":\"Takajo Station\""));
        assert!(json.contains("\"computed_at\":\"08:05:00\""));
    }
}
