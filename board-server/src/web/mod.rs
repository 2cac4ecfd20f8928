//! Web layer for the departure board.
//!
//! Serves the board page, the polled board fragment, and a JSON view of
//! the current snapshot.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
