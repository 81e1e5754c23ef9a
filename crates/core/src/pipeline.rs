//! The dashboard's pipeline context.
//!
//! [`Dashboard`] replaces the source dashboard's module-level table state:
//! it is constructed once at startup from the two input files and passed
//! explicitly into each stage. Every render cycle calls
//! [`Dashboard::snapshot`], which re-runs filter, the four reducers, and
//! the decomposition from the held tables — no caching or incremental
//! recomputation.

use std::path::Path;

use crate::aggregate::{
    daily_totals, monthly_totals, seasonal_totals, DailyTotal, MonthlyTotal, SeasonTotal,
};
use crate::decompose::{decompose, Decomposition};
use crate::error::Result;
use crate::filter::filter_daily;
use crate::loader::{load_daily, load_hourly};
use crate::model::{DailyRecord, DateRange, HourlyRecord, Year};

/// Seasonal window the source dashboard hard-codes for daily data.
pub const DEFAULT_SEASONAL_WINDOW: usize = 31;

/// Loaded, normalized tables plus the fixed decomposition window.
#[derive(Debug)]
pub struct Dashboard {
    daily: Vec<DailyRecord>,
    hourly: Vec<HourlyRecord>,
    span: DateRange,
    seasonal_window: usize,
}

/// Everything one render cycle needs, derived from the tables and the
/// active date range. Read-only; rebuilt on every relevant input change.
pub struct Snapshot {
    /// The range this snapshot was computed for.
    pub range: DateRange,
    /// Per-day totals over the filtered range, ordered by date.
    pub daily: Vec<DailyTotal>,
    /// Sum of the filtered daily totals (the dashboard's one scalar metric).
    pub total_rides: u64,
    /// Season breakdown of the full dataset. Ignores the date filter.
    pub seasons: Vec<SeasonTotal>,
    /// Month breakdown of 2011 hourly data. Ignores the date filter.
    pub monthly_2011: Vec<MonthlyTotal>,
    /// Month breakdown of 2012 hourly data. Ignores the date filter.
    pub monthly_2012: Vec<MonthlyTotal>,
    /// STL decomposition of the full daily series, or `None` when the
    /// series does not satisfy the algorithm's preconditions.
    pub decomposition: Option<Decomposition>,
}

impl Dashboard {
    /// Load and normalize both tables. Any load failure is fatal: the
    /// dashboard never renders from partial data.
    pub fn load(day_path: &Path, hour_path: &Path, seasonal_window: usize) -> Result<Self> {
        let daily = load_daily(day_path)?;
        let hourly = load_hourly(hour_path)?;

        // load_daily guarantees at least one row.
        let min = daily.iter().map(|r| r.date).min().expect("non-empty table");
        let max = daily.iter().map(|r| r.date).max().expect("non-empty table");

        tracing::info!(
            daily_rows = daily.len(),
            hourly_rows = hourly.len(),
            span_start = %min,
            span_end = %max,
            "loaded ride tables"
        );

        Ok(Self {
            daily,
            hourly,
            span: DateRange::new(min, max),
            seasonal_window,
        })
    }

    /// Full date span of the daily table; the range control is
    /// constrained to (and defaults to) this span.
    pub fn date_span(&self) -> DateRange {
        self.span
    }

    /// Run one render cycle's worth of aggregation.
    ///
    /// Only the daily totals see the date filter. The season and month
    /// breakdowns and the decomposition consume the full tables — the
    /// asymmetry is inherited from the source dashboard and preserved
    /// deliberately.
    pub fn snapshot(&self, range: DateRange) -> Snapshot {
        let filtered = filter_daily(&self.daily, range);
        let daily = daily_totals(&filtered);
        let total_rides = daily.iter().map(|t| t.total).sum();

        let decomposition = match decompose(&self.daily, self.seasonal_window) {
            Ok(d) => Some(d),
            Err(err) => {
                tracing::warn!(%err, "decomposition skipped");
                None
            }
        };

        Snapshot {
            range,
            daily,
            total_rides,
            seasons: seasonal_totals(&self.daily),
            monthly_2011: monthly_totals(&self.hourly, Year::Y2011),
            monthly_2012: monthly_totals(&self.hourly, Year::Y2012),
            decomposition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Month, Season};
    use chrono::{Days, NaiveDate};

    fn dashboard(days: usize) -> Dashboard {
        let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let daily: Vec<DailyRecord> = (0..days)
            .map(|i| DailyRecord {
                date: start + Days::new(i as u64),
                count: 100,
                season: Season::ALL[(i / 91).min(3)],
                year: Year::Y2011,
            })
            .collect();
        let hourly = vec![HourlyRecord {
            date_label: "2011-01-01".into(),
            hour: 8,
            count: 10,
            weighted_hours: 80,
            month: Month::Jan,
            year: Year::Y2011,
        }];
        let span = DateRange::new(start, start + Days::new(days as u64 - 1));
        Dashboard {
            daily,
            hourly,
            span,
            seasonal_window: DEFAULT_SEASONAL_WINDOW,
        }
    }

    #[test]
    fn snapshot_filters_only_the_daily_view() {
        let board = dashboard(365);
        let span = board.date_span();

        // Narrow the range to ten days.
        let narrow = DateRange::new(span.start, span.start + Days::new(9));
        let snap = board.snapshot(narrow);

        assert_eq!(snap.daily.len(), 10);
        assert_eq!(snap.total_rides, 1000);
        // Season and month breakdowns still see the full dataset.
        assert_eq!(snap.seasons.iter().map(|s| s.total).sum::<u64>(), 36_500);
        assert_eq!(snap.monthly_2011.len(), 1);
        assert!(snap.monthly_2012.is_empty());
    }

    #[test]
    fn seasons_invariant_to_range_control() {
        let board = dashboard(365);
        let span = board.date_span();
        let full = board.snapshot(span);
        let single = board.snapshot(DateRange::new(span.start, span.start));

        assert_eq!(full.seasons, single.seasons);
        assert_eq!(single.daily.len(), 1);
        assert_eq!(single.total_rides, 100);
    }

    #[test]
    fn inverted_range_degrades_to_empty_aggregates() {
        let board = dashboard(365);
        let span = board.date_span();
        let snap = board.snapshot(DateRange::new(span.end, span.start));

        assert!(snap.daily.is_empty());
        assert_eq!(snap.total_rides, 0);
        // The filter-independent views are unaffected.
        assert_eq!(snap.seasons.len(), 4);
        assert!(snap.decomposition.is_some());
    }

    #[test]
    fn decomposition_ignores_the_filter_and_spans_the_full_series() {
        let board = dashboard(365);
        let span = board.date_span();
        let snap = board.snapshot(DateRange::new(span.start, span.start));

        let d = snap.decomposition.expect("series long enough");
        assert_eq!(d.len(), 365);
        assert_eq!(d.dates[0], span.start);
        assert_eq!(*d.dates.last().unwrap(), span.end);
    }

    #[test]
    fn short_series_yields_snapshot_without_decomposition() {
        let board = dashboard(30);
        let snap = board.snapshot(board.date_span());

        assert!(snap.decomposition.is_none());
        // Everything else still renders.
        assert_eq!(snap.daily.len(), 30);
        assert_eq!(snap.seasons.len(), 1);
    }
}
