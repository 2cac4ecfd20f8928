//! Board configuration.

use std::time::Duration;

use crate::domain::Direction;

/// Tunable display parameters for the departure board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Maximum number of departures shown per direction.
    pub window_size: usize,

    /// How often the display window is recomputed.
    pub refresh_interval: Duration,

    /// How often remark rows swap with their normal form.
    pub carousel_interval: Duration,

    /// Whether the "expected on time" notice is shown by default.
    /// Individual requests can override this with a query parameter.
    pub show_on_time_notice: bool,
}

impl BoardConfig {
    /// Set the number of departures shown per direction.
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the window refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Set the remark carousel interval.
    pub fn with_carousel_interval(mut self, interval: Duration) -> Self {
        self.carousel_interval = interval;
        self
    }

    /// Set the default for the on-time notice.
    pub fn with_on_time_notice(mut self, show: bool) -> Self {
        self.show_on_time_notice = show;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            window_size: 3,
            refresh_interval: Duration::from_secs(3),
            carousel_interval: Duration::from_secs(6),
            show_on_time_notice: false,
        }
    }
}

/// The station described by the board.
#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Station name shown in the page heading.
    pub station_name: String,

    /// Line name shown under the heading.
    pub line_name: String,

    /// The directions to display, in order.
    pub directions: Vec<Direction>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            station_name: "Takajo Station".to_string(),
            line_name: "Nippo Main Line".to_string(),
            directions: vec![
                Direction::new("up", "Up: for Oita and Nakatsu", "UpTrains"),
                Direction::new("down", "Down: for Usuki and Saiki", "DownTrains"),
            ],
        }
    }
}
