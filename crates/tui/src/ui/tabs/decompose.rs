//! Seasonal-trend decomposition view.
//!
//! Shows the trend, seasonal, and residual components of the full daily
//! series. When the series does not satisfy the decomposition's
//! preconditions the chart is replaced with the failure reason rather
//! than rendered empty.

use ratatui::prelude::*;

use crate::app::App;
use crate::widgets::{line_chart, render_placeholder, Series};

const TITLE: &str = "STL Decomposition (trend / seasonal / residual)";

/// Draw the Decompose tab.
pub fn draw_decompose_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(d) = &app.snapshot.decomposition else {
        render_placeholder(
            frame,
            area,
            TITLE,
            "decomposition failed — insufficient or irregular series",
        );
        return;
    };

    let mid = d.dates.len() / 2;
    let x_labels = vec![
        Span::raw(d.dates[0].to_string()),
        Span::raw(d.dates[mid].to_string()),
        Span::raw(d.dates[d.dates.len() - 1].to_string()),
    ];
    let x_max = (d.len() as f64 - 1.0).max(1.0);

    let chart = line_chart(
        vec![
            Series {
                name: "Trend",
                points: &app.trend_points,
                color: Color::Cyan,
            },
            Series {
                name: "Seasonal",
                points: &app.seasonal_points,
                color: Color::Yellow,
            },
            Series {
                name: "Residual",
                points: &app.residual_points,
                color: Color::DarkGray,
            },
        ],
        TITLE,
        "Time",
        [0.0, x_max],
        x_labels,
    );
    frame.render_widget(chart, area);
}
