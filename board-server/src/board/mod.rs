//! Display-window selection and the periodic tasks that drive the board.
//!
//! The selection itself is a pure function over `(table, now)`; everything
//! stateful lives in [`DepartureBoard`], which recomputes the selection on
//! a short interval and advances the remark carousel on a longer one.

mod carousel;
mod config;
mod select;
mod service;
mod ticker;

pub use carousel::{CarouselPhase, RowMode, row_mode};
pub use config::{BoardConfig, StationConfig};
pub use select::upcoming_window;
pub use service::{BoardSnapshot, DepartureBoard, DirectionTable, DirectionWindow};
pub use ticker::Ticker;
