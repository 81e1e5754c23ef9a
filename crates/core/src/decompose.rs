//! Additive seasonal-trend decomposition of the daily ride series.
//!
//! STL-style decomposition via iterative loess smoothing: detrend, smooth
//! each cycle-subseries, remove the low-pass component, then re-smooth the
//! deseasonalized series for the trend. The residual is whatever remains,
//! so `trend + seasonal + residual` reconstructs the input exactly.
//!
//! The dashboard always decomposes the full historical series (the active
//! date filter is deliberately not applied) with a fixed seasonal window.

use chrono::NaiveDate;

use crate::error::{PipelineError, Result};
use crate::model::DailyRecord;

/// Decomposed daily series, aligned 1:1 with the input dates.
#[derive(Debug, Clone)]
pub struct Decomposition {
    pub dates: Vec<NaiveDate>,
    pub trend: Vec<f64>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<f64>,
}

impl Decomposition {
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }
}

/// Inner loop passes; two suffice for the non-robust fit.
const INNER_ITERATIONS: usize = 2;

/// Decompose the daily count series with the given seasonal window.
///
/// Fails when the series is shorter than twice the window; the caller
/// decides whether that is fatal (for the dashboard it is not — the
/// decomposition chart degrades to a placeholder).
pub fn decompose(records: &[DailyRecord], seasonal_window: usize) -> Result<Decomposition> {
    let n = records.len();
    let min = 2 * seasonal_window;
    if n < min {
        return Err(PipelineError::SeriesTooShort {
            len: n,
            min,
            window: seasonal_window,
        });
    }

    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    let series: Vec<f64> = records.iter().map(|r| f64::from(r.count)).collect();

    let spans = Spans::for_window(seasonal_window);
    let mut seasonal = vec![0.0; n];
    let mut trend = vec![0.0; n];

    for _ in 0..INNER_ITERATIONS {
        let detrended: Vec<f64> = series.iter().zip(&trend).map(|(y, t)| y - t).collect();

        let cycle = smooth_cycle_subseries(&detrended, seasonal_window, spans.seasonal);
        let low_pass = low_pass_filter(&cycle, seasonal_window, spans.low_pass);
        for i in 0..n {
            seasonal[i] = cycle[i] - low_pass[i];
        }

        let deseasonalized: Vec<f64> = series.iter().zip(&seasonal).map(|(y, s)| y - s).collect();
        trend = loess_smooth(&deseasonalized, spans.trend);
    }

    let residual: Vec<f64> = series
        .iter()
        .zip(&seasonal)
        .zip(&trend)
        .map(|((y, s), t)| y - s - t)
        .collect();

    Ok(Decomposition {
        dates,
        trend,
        seasonal,
        residual,
    })
}

/// Loess span lengths derived from the seasonal window, following the
/// defaults of Cleveland et al. (1990). All spans must be odd.
struct Spans {
    seasonal: usize,
    trend: usize,
    low_pass: usize,
}

impl Spans {
    fn for_window(window: usize) -> Self {
        let ns = window | 1;
        let nt = (1.5 * window as f64 / (1.0 - 1.5 / ns as f64)).ceil() as usize;
        Self {
            seasonal: ns,
            trend: nt | 1,
            low_pass: window | 1,
        }
    }
}

/// Smooth each cycle-subseries (the values sharing a position within the
/// seasonal cycle) independently, writing results back in place.
fn smooth_cycle_subseries(detrended: &[f64], period: usize, span: usize) -> Vec<f64> {
    let n = detrended.len();
    let mut result = vec![0.0; n];

    for offset in 0..period {
        let indices: Vec<usize> = (offset..n).step_by(period).collect();
        let subseries: Vec<f64> = indices.iter().map(|&i| detrended[i]).collect();
        let smoothed = loess_smooth(&subseries, span);
        for (&i, &value) in indices.iter().zip(&smoothed) {
            result[i] = value;
        }
    }

    result
}

/// Low-pass filter: three moving averages (period, period, 3) followed by
/// a loess pass. Removes what leaks between the seasonal and trend parts.
fn low_pass_filter(series: &[f64], period: usize, span: usize) -> Vec<f64> {
    let ma = moving_average(series, period);
    let ma = moving_average(&ma, period);
    let ma = moving_average(&ma, 3);
    loess_smooth(&ma, span)
}

/// Centered moving average; windows shrink at the edges.
fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let half = window / 2;
    let mut result = vec![0.0; n];
    for i in 0..n {
        let start = i.saturating_sub(half);
        let end = (i + half + 1).min(n);
        let sum: f64 = series[start..end].iter().sum();
        result[i] = sum / (end - start) as f64;
    }
    result
}

/// Local regression reduced to a tricube-weighted moving average over a
/// window of `span` points.
fn loess_smooth(values: &[f64], span: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let half = span / 2;
    let mut result = vec![0.0; n];

    for i in 0..n {
        let start = i.saturating_sub(half);
        let end = (i + half + 1).min(n);
        let max_dist = half as f64 + 1.0;

        let mut weight_sum = 0.0;
        let mut value_sum = 0.0;
        for j in start..end {
            let u = ((i as f64) - (j as f64)).abs() / max_dist;
            let w = if u < 1.0 { (1.0 - u.powi(3)).powi(3) } else { 0.0 };
            weight_sum += w;
            value_sum += w * values[j];
        }

        result[i] = if weight_sum > 0.0 {
            value_sum / weight_sum
        } else {
            values[i]
        };
    }

    result
}
