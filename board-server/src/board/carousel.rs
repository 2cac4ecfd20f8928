//! Remark carousel.
//!
//! Rows that carry a remark alternate between their normal form and a
//! full-width remark form. The alternation is driven by a shared phase
//! counter that a ticker advances on a fixed interval; the mode decision
//! itself is a pure function so it can be evaluated at render time.

use crate::domain::TrainRecord;

/// Carousel phase counter. Remark-capable rows show their remark form on
/// odd phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselPhase(pub u64);

impl CarouselPhase {
    /// The next phase.
    pub fn advance(self) -> Self {
        CarouselPhase(self.0.wrapping_add(1))
    }

    /// Whether remark-capable rows show their remark form in this phase.
    pub fn shows_remark(self) -> bool {
        self.0 % 2 == 1
    }
}

/// How one row is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    /// The regular cells: id, time, type, destination, carriages, platform.
    Normal,
    /// A single full-width cell showing the remark text.
    Remark,
    /// The pass-through form; never swaps to a remark.
    Pass,
}

/// Decide how `record` is displayed at `phase`.
///
/// Pass-through trains always use the pass form, whatever their remark
/// holds. Trains without a remark always use the normal form.
pub fn row_mode(record: &TrainRecord, phase: CarouselPhase) -> RowMode {
    if record.train_type.is_pass_through() {
        return RowMode::Pass;
    }

    match &record.remark {
        Some(_) if phase.shows_remark() => RowMode::Remark,
        _ => RowMode::Normal,
    }
}
