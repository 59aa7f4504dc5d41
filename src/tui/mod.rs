//! Terminal User Interface (TUI) for stoa.
//!
//! A tabbed shell over the breathing timer, meditation player, article
//! library and practice stats. Built with ratatui and crossterm. The
//! one-second tick is derived from the event-loop poll deadline, so a
//! paused or torn-down view never advances a timer.

mod app;
mod event;
mod ui;

pub use app::{App, Tab};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::articles::ArticleStorage;
use crate::config::Config;
use crate::error::StoaError;
use crate::meditation::CommandPlayer;
use crate::practice::PracticeStorage;

/// State advancement cadence.
const TICK: Duration = Duration::from_secs(1);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: Config) -> Result<(), StoaError> {
    let article_storage = ArticleStorage::new()?;
    let practice_storage = PracticeStorage::new()?;
    let ambient = CommandPlayer::new(&config.meditation)?;

    let mut app = App::new(
        config,
        article_storage,
        practice_storage,
        Box::new(ambient),
    )?;

    // Setup terminal
    enable_raw_mode().map_err(|e| StoaError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| StoaError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StoaError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Record in-flight practice and release audio before leaving.
    app.teardown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), StoaError> {
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StoaError::Terminal(format!("Failed to draw: {e}")))?;

        // Wait for input until the next one-second tick is due.
        let timeout = TICK.saturating_sub(last_tick.elapsed());
        event::handle_events(app, timeout)?;

        if last_tick.elapsed() >= TICK {
            app.on_tick();
            last_tick += TICK;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
