//! The live board: loaded tables plus the periodic tasks that drive it.

use chrono::{Local, NaiveTime};
use tokio::sync::watch;

use crate::domain::{Direction, TrainRecord};

use super::carousel::CarouselPhase;
use super::config::BoardConfig;
use super::select::upcoming_window;
use super::ticker::Ticker;

/// One direction's load outcome: a validated table, or the error message
/// shown in its place.
#[derive(Debug, Clone)]
pub struct DirectionTable {
    pub direction: Direction,
    pub table: Result<Vec<TrainRecord>, String>,
}

/// What one direction currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionWindow {
    pub direction: Direction,

    /// The departures on display, soonest first.
    pub window: Vec<TrainRecord>,

    /// Load failure for this direction, shown instead of a table.
    pub error: Option<String>,
}

/// A full recomputation result, published on every refresh tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub directions: Vec<DirectionWindow>,

    /// Wall-clock time the snapshot was computed at.
    pub computed_at: NaiveTime,
}

impl BoardSnapshot {
    fn compute(tables: &[DirectionTable], now: NaiveTime, window_size: usize) -> Self {
        let directions = tables
            .iter()
            .map(|loaded| match &loaded.table {
                Ok(table) => DirectionWindow {
                    direction: loaded.direction.clone(),
                    window: upcoming_window(table, now, window_size),
                    error: None,
                },
                Err(message) => DirectionWindow {
                    direction: loaded.direction.clone(),
                    window: Vec::new(),
                    error: Some(message.clone()),
                },
            })
            .collect();

        Self {
            directions,
            computed_at: now,
        }
    }
}

/// The running departure board.
///
/// Owns two independent repeating tasks: a window refresher recomputing the
/// selection from scratch each tick, and a carousel ticker advancing the
/// remark phase. Neither synchronizes with the other, and both stop when
/// the board is dropped. Results are published through watch channels; the
/// web layer holds receivers only.
pub struct DepartureBoard {
    snapshot_rx: watch::Receiver<BoardSnapshot>,
    phase_rx: watch::Receiver<CarouselPhase>,
    _refresher: Ticker,
    _carousel: Ticker,
}

impl DepartureBoard {
    /// Start the board against the local wall clock.
    pub fn start(tables: Vec<DirectionTable>, config: &BoardConfig) -> Self {
        Self::start_with_clock(tables, config, || Local::now().time())
    }

    /// Start the board with an injected clock.
    pub fn start_with_clock<C>(tables: Vec<DirectionTable>, config: &BoardConfig, clock: C) -> Self
    where
        C: Fn() -> NaiveTime + Send + 'static,
    {
        let window_size = config.window_size;

        let initial = BoardSnapshot::compute(&tables, clock(), window_size);
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (phase_tx, phase_rx) = watch::channel(CarouselPhase::default());

        let refresher = Ticker::spawn(config.refresh_interval, move || {
            let snapshot = BoardSnapshot::compute(&tables, clock(), window_size);
            // Send only fails once every receiver is gone.
            let _ = snapshot_tx.send(snapshot);
        });

        let carousel = Ticker::spawn(config.carousel_interval, move || {
            phase_tx.send_modify(|phase| *phase = phase.advance());
        });

        Self {
            snapshot_rx,
            phase_rx,
            _refresher: refresher,
            _carousel: carousel,
        }
    }

    /// Receiver for the latest snapshot.
    pub fn snapshot(&self) -> watch::Receiver<BoardSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Receiver for the current carousel phase.
    pub fn phase(&self) -> watch::Receiver<CarouselPhase> {
        self.phase_rx.clone()
    }
}
