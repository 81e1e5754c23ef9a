//! Monthly hours view: total weighted ride-hours per month, per year.
//!
//! Mirrors the source dashboard's three sub-views (2011, 2012, both
//! overlaid). Always computed over the full hourly table; the x axis is
//! the fixed calendar month order.

use ratatui::prelude::*;

use crate::app::{App, MonthlyView};
use crate::widgets::{line_chart, render_placeholder, Series};

/// Draw the Monthly tab.
pub fn draw_monthly_tab(frame: &mut Frame, area: Rect, app: &App) {
    let mut series = Vec::new();
    if matches!(app.monthly_view, MonthlyView::Y2011 | MonthlyView::Both)
        && !app.monthly_points[0].is_empty()
    {
        series.push(Series {
            name: "2011",
            points: &app.monthly_points[0],
            color: Color::Blue,
        });
    }
    if matches!(app.monthly_view, MonthlyView::Y2012 | MonthlyView::Both)
        && !app.monthly_points[1].is_empty()
    {
        series.push(Series {
            name: "2012",
            points: &app.monthly_points[1],
            color: Color::Red,
        });
    }

    let title = match app.monthly_view {
        MonthlyView::Y2011 => "Total Hours per Month (2011)",
        MonthlyView::Y2012 => "Total Hours per Month (2012)",
        MonthlyView::Both => "Total Hours per Month (2011-2012)",
    };

    if series.is_empty() {
        render_placeholder(frame, area, title, "No hourly data for this year");
        return;
    }

    // Fixed calendar axis regardless of which months are present.
    let x_labels = vec![Span::raw("Jan"), Span::raw("June"), Span::raw("Dec")];
    let chart = line_chart(series, title, "Month", [0.0, 11.0], x_labels);
    frame.render_widget(chart, area);
}
