//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::watch;

use crate::board::{BoardConfig, BoardSnapshot, CarouselPhase, StationConfig};

/// Shared application state.
///
/// The web layer never computes board contents itself; it only reads the
/// latest values published by the board's background tasks.
#[derive(Clone)]
pub struct AppState {
    /// Latest snapshot from the window refresher.
    pub snapshot: watch::Receiver<BoardSnapshot>,

    /// Current carousel phase.
    pub phase: watch::Receiver<CarouselPhase>,

    /// Station identity shown on the page.
    pub station: Arc<StationConfig>,

    /// Display configuration.
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        snapshot: watch::Receiver<BoardSnapshot>,
        phase: watch::Receiver<CarouselPhase>,
        station: StationConfig,
        config: BoardConfig,
    ) -> Self {
        Self {
            snapshot,
            phase,
            station: Arc::new(station),
            config: Arc::new(config),
        }
    }
}
