//! Board directions.

/// A named per-direction timetable on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    /// Short identifier used in logs and the JSON surface, e.g. "up".
    pub key: String,
    /// Heading shown above this direction's section.
    pub title: String,
    /// Name of the source table, without the ".csv" suffix.
    pub table: String,
}

impl Direction {
    /// Create a new direction.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            table: table.into(),
        }
    }
}
