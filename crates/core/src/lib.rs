//! # rideboard-core
//!
//! The aggregation pipeline behind the rideboard bike-sharing dashboard.
//!
//! Four sequential stages, each a pure function over in-memory tables:
//!
//! 1. **Load & normalize** — parse the two CSV tables, decode the
//!    season/month/year codes, derive the hourly `hour * count` column.
//! 2. **Filter** — restrict daily rows to an inclusive date range.
//! 3. **Aggregate** — daily totals (filtered), season totals and monthly
//!    totals per year (always the full dataset).
//! 4. **Decompose** — additive STL over the full daily series.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use rideboard_core::{Dashboard, DEFAULT_SEASONAL_WINDOW};
//!
//! let board = Dashboard::load(
//!     Path::new("data/day.csv"),
//!     Path::new("data/hour.csv"),
//!     DEFAULT_SEASONAL_WINDOW,
//! )?;
//! let snapshot = board.snapshot(board.date_span());
//! println!("total rides: {}", snapshot.total_rides);
//! # Ok::<(), rideboard_core::PipelineError>(())
//! ```

pub mod aggregate;
pub mod decompose;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;

mod error;

pub use aggregate::{DailyTotal, MonthlyTotal, SeasonTotal};
pub use decompose::Decomposition;
pub use error::{PipelineError, Result};
pub use model::{DailyRecord, DateRange, HourlyRecord, Month, Season, Year};
pub use pipeline::{Dashboard, Snapshot, DEFAULT_SEASONAL_WINDOW};
