//! HTTP timetable source.
//!
//! The per-direction tables are plain CSV files served under a common base
//! URL; this client fetches one table per request and validates it before
//! handing it onward.

use crate::domain::TrainRecord;

use super::convert::convert_table;
use super::error::TimetableError;
use super::types::read_rows;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP timetable source.
#[derive(Debug, Clone)]
pub struct TimetableConfig {
    /// Base URL the tables are served under.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TimetableConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client fetching static timetable tables.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    base_url: String,
}

impl TimetableClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TimetableConfig) -> Result<Self, TimetableError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch and validate one table.
    ///
    /// `table` is the table name without the ".csv" suffix. A non-success
    /// status or a malformed body fails the whole load; there is no partial
    /// result.
    pub async fn fetch_table(&self, table: &str) -> Result<Vec<TrainRecord>, TimetableError> {
        let url = format!("{}/{}.csv", self.base_url.trim_end_matches('/'), table);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimetableError::Status {
                table: table.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        let rows = read_rows(&body)?;
        Ok(convert_table(&rows)?)
    }
}
