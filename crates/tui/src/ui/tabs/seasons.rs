//! Season breakdown view: bar chart of total rides per season.
//!
//! Always computed over the full dataset; the date-range control has no
//! effect here. The source dashboard showed the same bars twice (best
//! and worst first), so the ordering is toggleable.

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders},
};

use crate::app::{App, SeasonOrder};

/// Draw the Seasons tab.
pub fn draw_seasons_tab(frame: &mut Frame, area: Rect, app: &App) {
    let mut bars: Vec<(&str, u64)> = app
        .snapshot
        .seasons
        .iter()
        .map(|t| (t.season.label(), t.total))
        .collect();
    if app.season_order == SeasonOrder::Reversed {
        bars.reverse();
    }

    let title = format!(" Rides per Season ({} order) ", app.season_order.name());
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&bars)
        .bar_width(9)
        .bar_gap(3)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}
