//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/fragment/board", get(board_fragment))
        .route("/api/board", get(board_json))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Board page shell; its contents are filled in by the polling script.
async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    let template = BoardPageTemplate {
        station_name: state.station.station_name.clone(),
        line_name: state.station.line_name.clone(),
        refresh_millis: state.config.refresh_interval.as_millis() as u64,
        show_on_time_notice: query.on_time.unwrap_or(state.config.show_on_time_notice),
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// The board sections fragment polled by the page.
async fn board_fragment(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.snapshot.borrow().clone();
    let phase = *state.phase.borrow();

    let template = BoardSectionsTemplate::from_snapshot(&snapshot, phase);
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Current board state as JSON.
async fn board_json(State(state): State<AppState>) -> Json<BoardResponse> {
    let snapshot = state.snapshot.borrow().clone();

    Json(BoardResponse {
        station: state.station.station_name.clone(),
        line: state.station.line_name.clone(),
        computed_at: snapshot.computed_at.format("%H:%M:%S").to_string(),
        directions: snapshot
            .directions
            .iter()
            .map(DirectionResult::from_window)
            .collect(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!("{status}: {message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
