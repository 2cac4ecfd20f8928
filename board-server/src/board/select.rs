//! Upcoming-window selection.
//!
//! Given the full table for one direction and the current wall-clock time,
//! pick the departures to show. Entries that have already departed are
//! skipped only until the first not-yet-departed entry is found; from there
//! the window is a contiguous run of the sorted table, so pass-through and
//! queued entries inside the upcoming region are not filtered by time.

use chrono::NaiveTime;

use crate::domain::TrainRecord;

/// Select the next `limit` departures at `now`.
///
/// The table is stably sorted by scheduled time (ties keep their input
/// order) and the result is the run of up to `limit` records starting at
/// the first entry whose scheduled time is at or after `now`. The result is
/// empty when the table is empty or every entry has already departed; the
/// scan never wraps to the next day.
///
/// Pure and infallible: identical `(table, now)` inputs yield identical
/// output, and a valid table can never make selection fail.
pub fn upcoming_window(table: &[TrainRecord], now: NaiveTime, limit: usize) -> Vec<TrainRecord> {
    if limit == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<&TrainRecord> = table.iter().collect();
    sorted.sort_by_key(|record| record.scheduled_time);

    let mut window = Vec::new();
    let mut in_upcoming_region = false;

    for record in sorted {
        if !in_upcoming_region && !record.scheduled_time.is_upcoming_at(now) {
            continue;
        }
        in_upcoming_region = true;

        window.push(record.clone());
        if window.len() >= limit {
            break;
        }
    }

    window
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{BoardTime, TrainType};
    use proptest::prelude::*;

    fn build_table(times: &[(u32, u32)]) -> Vec<TrainRecord> {
        times
            .iter()
            .enumerate()
            .map(|(i, &(hour, minute))| TrainRecord {
                id: format!("t{i}"),
                scheduled_time: BoardTime::from_hm(hour, minute).unwrap(),
                train_type: TrainType::Normal,
                destination: "Oita".to_string(),
                carriage_count: None,
                platform: "1".to_string(),
                remark: None,
            })
            .collect()
    }

    prop_compose! {
        fn times()(v in prop::collection::vec((0u32..24, 0u32..60), 0..20)) -> Vec<(u32, u32)> {
            v
        }
    }

    prop_compose! {
        fn clock()(hour in 0u32..24, minute in 0u32..60, second in 0u32..60) -> NaiveTime {
            NaiveTime::from_hms_opt(hour, minute, second).unwrap()
        }
    }

    proptest! {
        /// The window never exceeds the limit
        #[test]
        fn window_is_bounded(times in times(), now in clock()) {
            let table = build_table(&times);
            let window = upcoming_window(&table, now, 3);

            prop_assert!(window.len() <= 3);
        }

        /// The window is ascending in scheduled time
        #[test]
        fn window_is_sorted(times in times(), now in clock()) {
            let table = build_table(&times);
            let window = upcoming_window(&table, now, 3);

            for pair in window.windows(2) {
                prop_assert!(pair[0].scheduled_time <= pair[1].scheduled_time);
            }
        }

        /// The window is exactly the contiguous run of the stably sorted
        /// table starting at the first entry at or after `now`
        #[test]
        fn window_is_a_contiguous_sorted_run(times in times(), now in clock()) {
            let table = build_table(&times);

            let mut sorted: Vec<&TrainRecord> = table.iter().collect();
            sorted.sort_by_key(|record| record.scheduled_time);

            let expected: Vec<TrainRecord> = match sorted
                .iter()
                .position(|record| record.scheduled_time.is_upcoming_at(now))
            {
                Some(start) => sorted[start..]
                    .iter()
                    .take(3)
                    .map(|record| (*record).clone())
                    .collect(),
                None => Vec::new(),
            };

            prop_assert_eq!(upcoming_window(&table, now, 3), expected);
        }

        /// Every entry before the window's first, in sorted order, has departed
        #[test]
        fn entries_before_window_have_departed(times in times(), now in clock()) {
            let table = build_table(&times);
            let window = upcoming_window(&table, now, 3);

            if let Some(first) = window.first() {
                let mut sorted: Vec<&TrainRecord> = table.iter().collect();
                sorted.sort_by_key(|record| record.scheduled_time);

                for record in sorted.iter().take_while(|r| r.id != first.id) {
                    prop_assert!(!record.scheduled_time.is_upcoming_at(now));
                }
            }
        }

        /// A table with nothing upcoming yields an empty window
        #[test]
        fn fully_departed_table_is_empty(times in times()) {
            let table = build_table(&times);

            if let Some(latest) = table.iter().map(|record| record.scheduled_time).max() {
                // One second past the latest entry; cannot wrap because
                // scheduled times carry no seconds of their own.
                let after = latest.time() + chrono::Duration::seconds(1);
                prop_assert!(upcoming_window(&table, after, 3).is_empty());
            }
        }

        /// Selection is idempotent
        #[test]
        fn idempotent(times in times(), now in clock()) {
            let table = build_table(&times);

            prop_assert_eq!(
                upcoming_window(&table, now, 3),
                upcoming_window(&table, now, 3)
            );
        }
    }
}
