//! Chart builders shared by the dashboard tabs.
//!
//! Builders borrow point buffers held in the app state; nothing here
//! allocates per frame beyond the widget itself.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// One named line on a chart.
pub struct Series<'a> {
    pub name: &'a str,
    pub points: &'a [(f64, f64)],
    pub color: Color,
}

/// Build a line chart from one or more series sharing an x axis.
pub fn line_chart<'a>(
    series: Vec<Series<'a>>,
    title: &'a str,
    x_title: &'a str,
    x_bounds: [f64; 2],
    x_labels: Vec<Span<'a>>,
) -> Chart<'a> {
    let (y_min, y_max) = y_bounds(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let datasets: Vec<Dataset> = series
        .into_iter()
        .map(|s| {
            Dataset::default()
                .name(s.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(s.points)
        })
        .collect();

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .x_axis(
            Axis::default()
                .title(x_title)
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{y_min:.0}")),
                    Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{y_max:.0}")),
                ]),
        )
}

/// Y-axis bounds with a little padding; tolerates empty and flat series.
fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// Placeholder block for a chart with nothing to show.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    use ratatui::widgets::Paragraph;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(Style::default().fg(Color::DarkGray));

    // Calculate inner area before rendering the block
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);
    let msg = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(msg, centered[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_bounds_pads_the_extremes() {
        let (min, max) = y_bounds([10.0, 20.0, 30.0].into_iter());
        assert!(min < 10.0);
        assert!(max > 30.0);
    }

    #[test]
    fn y_bounds_of_empty_series_is_unit_interval() {
        assert_eq!(y_bounds(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn y_bounds_of_flat_series_has_nonzero_height() {
        let (min, max) = y_bounds([5.0, 5.0].into_iter());
        assert!(max - min > 0.0);
    }
}
