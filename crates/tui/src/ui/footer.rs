//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Tab};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let tab_help = match app.current_tab {
        Tab::Daily => "[ ] ±1d start  { } ±1d end  , . ±7d start  < > ±7d end  [r] Reset",
        Tab::Seasons => "[o] Toggle order",
        Tab::Monthly => "[y] Year view",
        Tab::Decompose => "",
    };
    let help_text = format!("{tab_help}  |  [1-4] View  [Tab/←→] Navigate  [q] Quit");

    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{status} | {help_text}")
    } else {
        help_text
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
