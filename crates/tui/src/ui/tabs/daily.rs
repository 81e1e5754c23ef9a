//! Daily sharing view: the scalar total plus the per-day line chart.
//!
//! This is the only view driven by the date-range control.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::{line_chart, render_placeholder, Series};

/// Draw the Daily tab.
pub fn draw_daily_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10)])
        .split(area);

    draw_total_metric(frame, chunks[0], app);
    draw_daily_chart(frame, chunks[1], app);
}

fn draw_total_metric(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        "Total Sharing: {}    Days: {}    Range: {} → {}",
        app.snapshot.total_rides,
        app.snapshot.daily.len(),
        app.range.start,
        app.range.end
    );

    let metric = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title(" Daily Sharing "));

    frame.render_widget(metric, area);
}

fn draw_daily_chart(frame: &mut Frame, area: Rect, app: &App) {
    if app.daily_points.is_empty() {
        render_placeholder(
            frame,
            area,
            "Rides per Day",
            "No rides in the selected range",
        );
        return;
    }

    let totals = &app.snapshot.daily;
    let mid = totals.len() / 2;
    let x_labels = vec![
        Span::raw(totals[0].date.to_string()),
        Span::raw(totals[mid].date.to_string()),
        Span::raw(totals[totals.len() - 1].date.to_string()),
    ];
    let x_max = (totals.len() as f64 - 1.0).max(1.0);

    let chart = line_chart(
        vec![Series {
            name: "total_bicycle",
            points: &app.daily_points,
            color: Color::Cyan,
        }],
        "Rides per Day",
        "Date",
        [0.0, x_max],
        x_labels,
    );
    frame.render_widget(chart, area);
}
