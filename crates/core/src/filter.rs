//! The date-range filter stage.

use crate::model::{DailyRecord, DateRange};

/// Restrict daily rows to an inclusive date range.
///
/// Runs once per user interaction. No side effects: an inverted range
/// (`start > end`) simply selects nothing, and the full-span range is an
/// identity filter.
pub fn filter_daily(records: &[DailyRecord], range: DateRange) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect()
}
