//! rideboard - terminal dashboard for bike-sharing ride data.

mod app;
mod event;
mod ui;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rideboard_core::{Dashboard, DEFAULT_SEASONAL_WINDOW};

use app::App;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

#[derive(Parser)]
#[command(name = "rideboard")]
#[command(about = "Bike sharing dashboard", long_about = None)]
struct Args {
    /// Daily ride counts (CSV)
    #[arg(long, default_value = "data/day.csv")]
    day: PathBuf,

    /// Hourly ride counts (CSV)
    #[arg(long, default_value = "data/hour.csv")]
    hour: PathBuf,

    /// Seasonal window for the STL decomposition
    #[arg(long, default_value_t = DEFAULT_SEASONAL_WINDOW)]
    seasonal_window: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to stderr so the alternate screen stays clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rideboard=info".into()),
        )
        .init();

    // Load before touching the terminal: a load failure is fatal and
    // should be reported plainly.
    let board = match Dashboard::load(&args.day, &args.hour, args.seasonal_window) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(board);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        app.clear_expired_status();

        if let Some(event) = poll_event(tick_rate)? {
            match event {
                Event::Key(key) => handle_key_event(app, key),
                Event::Resize(_, _) => {} // Terminal will redraw automatically
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
