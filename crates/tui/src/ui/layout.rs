//! Main layout for the dashboard.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use super::footer::draw_footer;
use super::header::draw_header;
use super::tabs::{draw_daily_tab, draw_decompose_tab, draw_monthly_tab, draw_seasons_tab};
use crate::app::{App, Tab};

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Header, tab bar, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(size);

    draw_header(frame, chunks[0], app);
    draw_tab_bar(frame, chunks[1], app);

    let content_area = chunks[2];
    match app.current_tab {
        Tab::Daily => draw_daily_tab(frame, content_area, app),
        Tab::Seasons => draw_seasons_tab(frame, content_area, app),
        Tab::Monthly => draw_monthly_tab(frame, content_area, app),
        Tab::Decompose => draw_decompose_tab(frame, content_area, app),
    }

    draw_footer(frame, chunks[3], app);
}

/// Draw the tab bar.
fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if *tab == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!(" {} {} ", i + 1, tab.name())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Views "))
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}
