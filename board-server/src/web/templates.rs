//! Askama templates for the board frontend.

use askama::Template;

use crate::board::{BoardSnapshot, CarouselPhase, DirectionWindow, RowMode, row_mode};
use crate::domain::TrainRecord;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Board page shell. The board sections are fetched and refreshed by the
/// static polling script.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPageTemplate {
    pub station_name: String,
    pub line_name: String,

    /// Poll interval for the fragment, in milliseconds.
    pub refresh_millis: u64,

    /// Whether the "expected on time" notice is shown.
    pub show_on_time_notice: bool,
}

// ============================================================================
// Fragment Templates (polling responses, no base.html)
// ============================================================================

/// Board sections fragment: one section per direction.
#[derive(Template)]
#[template(path = "board_sections.html")]
pub struct BoardSectionsTemplate {
    pub sections: Vec<DirectionView>,
    pub computed_at: String,
}

impl BoardSectionsTemplate {
    /// Build the fragment from the current snapshot and carousel phase.
    pub fn from_snapshot(snapshot: &BoardSnapshot, phase: CarouselPhase) -> Self {
        Self {
            sections: snapshot
                .directions
                .iter()
                .map(|window| DirectionView::from_window(window, phase))
                .collect(),
            computed_at: snapshot.computed_at.format("%H:%M:%S").to_string(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One direction's section.
#[derive(Debug, Clone)]
pub struct DirectionView {
    pub title: String,

    /// Load failure shown in place of the table.
    pub error: Option<String>,

    pub rows: Vec<RowView>,
}

impl DirectionView {
    /// Create from a direction's current window.
    pub fn from_window(window: &DirectionWindow, phase: CarouselPhase) -> Self {
        Self {
            title: window.direction.title.clone(),
            error: window.error.clone(),
            rows: window
                .window
                .iter()
                .map(|record| RowView::from_record(record, phase))
                .collect(),
        }
    }
}

/// One row of a direction table, with its display mode resolved.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: String,
    pub time: String,
    pub type_label: String,
    pub destination: String,

    /// Carriage count, or "?" when unknown.
    pub carriages: String,

    pub platform: String,
    pub remark: String,

    /// Render the pass-through form.
    pub is_pass: bool,

    /// Render the full-width remark form.
    pub show_remark: bool,
}

impl RowView {
    /// Create from a domain record at the given carousel phase.
    pub fn from_record(record: &TrainRecord, phase: CarouselPhase) -> Self {
        let mode = row_mode(record, phase);

        Self {
            id: record.id.clone(),
            time: record.scheduled_time.to_string(),
            type_label: record.train_type.label().to_string(),
            destination: record.destination.clone(),
            carriages: record
                .carriage_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "?".to_string()),
            platform: record.platform.clone(),
            remark: record.remark.clone().unwrap_or_default(),
            is_pass: mode == RowMode::Pass,
            show_remark: mode == RowMode::Remark,
        }
    }
}
