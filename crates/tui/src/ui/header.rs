//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the header bar with the title and the active date range.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(format!(
        "rideboard - Bike Sharing Dashboard    [{} → {}]",
        app.range.start, app.range.end
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
