//! Application state for the dashboard.
//!
//! The app owns the pipeline context and the active date range. Every
//! range change re-runs one full render cycle (`Dashboard::snapshot`) and
//! rebuilds the chart point buffers; the draw loop itself only borrows.

use std::time::Instant;

use chrono::{Duration, NaiveDate};
use rideboard_core::{Dashboard, DateRange, Snapshot, Year};

/// Main application state.
pub struct App {
    board: Dashboard,
    /// Full span of the daily table; the range control clamps to it.
    pub bounds: DateRange,
    /// The active, inclusive date range.
    pub range: DateRange,
    /// Aggregates for the current range.
    pub snapshot: Snapshot,
    pub current_tab: Tab,
    pub monthly_view: MonthlyView,
    pub season_order: SeasonOrder,
    pub status_message: Option<(String, Instant)>,
    pub should_quit: bool,

    // Chart point buffers derived from the snapshot, so the draw loop can
    // borrow instead of rebuilding per frame.
    pub daily_points: Vec<(f64, f64)>,
    pub monthly_points: [Vec<(f64, f64)>; 2],
    pub trend_points: Vec<(f64, f64)>,
    pub seasonal_points: Vec<(f64, f64)>,
    pub residual_points: Vec<(f64, f64)>,
}

impl App {
    pub fn new(board: Dashboard) -> Self {
        let bounds = board.date_span();
        let snapshot = board.snapshot(bounds);
        let mut app = Self {
            board,
            bounds,
            range: bounds,
            snapshot,
            current_tab: Tab::Daily,
            monthly_view: MonthlyView::Y2011,
            season_order: SeasonOrder::Natural,
            status_message: None,
            should_quit: false,
            daily_points: Vec::new(),
            monthly_points: [Vec::new(), Vec::new()],
            trend_points: Vec::new(),
            seasonal_points: Vec::new(),
            residual_points: Vec::new(),
        };
        app.rebuild_points();
        app
    }

    /// Re-run the pipeline for the current range and rebuild chart buffers.
    pub fn refresh(&mut self) {
        self.snapshot = self.board.snapshot(self.range);
        self.rebuild_points();
    }

    fn rebuild_points(&mut self) {
        self.daily_points = self
            .snapshot
            .daily
            .iter()
            .enumerate()
            .map(|(i, t)| (i as f64, t.total as f64))
            .collect();

        for (slot, totals) in self
            .monthly_points
            .iter_mut()
            .zip([&self.snapshot.monthly_2011, &self.snapshot.monthly_2012])
        {
            *slot = totals
                .iter()
                .map(|t| (t.month.index() as f64, t.total_hours as f64))
                .collect();
        }

        if let Some(d) = &self.snapshot.decomposition {
            self.trend_points = index_points(&d.trend);
            self.seasonal_points = index_points(&d.seasonal);
            self.residual_points = index_points(&d.residual);
        } else {
            self.trend_points.clear();
            self.seasonal_points.clear();
            self.residual_points.clear();
        }
    }

    /// Move the range start by `days`, clamped to the data span. The start
    /// may pass the end: that is a legal, empty range.
    pub fn shift_start(&mut self, days: i64) {
        self.range.start = clamp_date(self.range.start + Duration::days(days), self.bounds);
        self.refresh();
        self.set_status(format!("Range: {} → {}", self.range.start, self.range.end));
    }

    /// Move the range end by `days`, clamped to the data span.
    pub fn shift_end(&mut self, days: i64) {
        self.range.end = clamp_date(self.range.end + Duration::days(days), self.bounds);
        self.refresh();
        self.set_status(format!("Range: {} → {}", self.range.start, self.range.end));
    }

    /// Reset the range to the full data span.
    pub fn reset_range(&mut self) {
        self.range = self.bounds;
        self.refresh();
        self.set_status("Range reset to full span");
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }

    pub fn cycle_monthly_view(&mut self) {
        self.monthly_view = self.monthly_view.next();
        self.set_status(format!("Monthly view: {}", self.monthly_view.name()));
    }

    pub fn toggle_season_order(&mut self) {
        self.season_order = self.season_order.toggled();
        self.set_status(format!("Season order: {}", self.season_order.name()));
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }
}

fn clamp_date(date: NaiveDate, bounds: DateRange) -> NaiveDate {
    date.clamp(bounds.start, bounds.end)
}

fn index_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// The dashboard's chart groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Daily,
    Seasons,
    Monthly,
    Decompose,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Daily => Tab::Seasons,
            Tab::Seasons => Tab::Monthly,
            Tab::Monthly => Tab::Decompose,
            Tab::Decompose => Tab::Daily,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Daily => Tab::Decompose,
            Tab::Seasons => Tab::Daily,
            Tab::Monthly => Tab::Seasons,
            Tab::Decompose => Tab::Monthly,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            1 => Tab::Daily,
            2 => Tab::Seasons,
            3 => Tab::Monthly,
            4 => Tab::Decompose,
            _ => Tab::Daily,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Daily => 0,
            Tab::Seasons => 1,
            Tab::Monthly => 2,
            Tab::Decompose => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Daily => "Daily",
            Tab::Seasons => "Seasons",
            Tab::Monthly => "Monthly",
            Tab::Decompose => "Decompose",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Daily, Tab::Seasons, Tab::Monthly, Tab::Decompose]
    }
}

/// Which year(s) the monthly chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthlyView {
    #[default]
    Y2011,
    Y2012,
    Both,
}

impl MonthlyView {
    pub fn next(self) -> Self {
        match self {
            MonthlyView::Y2011 => MonthlyView::Y2012,
            MonthlyView::Y2012 => MonthlyView::Both,
            MonthlyView::Both => MonthlyView::Y2011,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MonthlyView::Y2011 => Year::Y2011.label(),
            MonthlyView::Y2012 => Year::Y2012.label(),
            MonthlyView::Both => "2011 & 2012",
        }
    }
}

/// Ordering of the season bars: code order or reversed (the source
/// dashboard shows both, side by side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonOrder {
    #[default]
    Natural,
    Reversed,
}

impl SeasonOrder {
    pub fn toggled(self) -> Self {
        match self {
            SeasonOrder::Natural => SeasonOrder::Reversed,
            SeasonOrder::Reversed => SeasonOrder::Natural,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SeasonOrder::Natural => "natural",
            SeasonOrder::Reversed => "reversed",
        }
    }
}
