//! Reusable dashboard widgets.

mod chart;

pub use chart::{line_chart, render_placeholder, Series};
