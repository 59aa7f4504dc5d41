//! Meditation command implementation.
//!
//! Lists the session catalog and runs the countdown player with an
//! optional looping ambient track. Audio failures are reported but
//! never end the session.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute};
use serde_json::json;

use crate::breathing::Ticker;
use crate::cli::args::{MeditateCommands, OutputFormat};
use crate::config::Config;
use crate::error::StoaError;
use crate::meditation::{
    AmbientPlayer, AmbientTrack, CommandPlayer, MeditationTheme, SessionPlayer, SessionSpec,
};
use crate::practice::{PracticeKind, PracticeSession, PracticeStorage};

const KEY_POLL: Duration = Duration::from_millis(50);

/// Execute meditate subcommands.
pub fn meditate(
    config: &Config,
    cmd: MeditateCommands,
    format: OutputFormat,
) -> Result<String, StoaError> {
    match cmd {
        MeditateCommands::List => list(format),
        MeditateCommands::Start { session, sound } => start(config, &session, sound.as_deref()),
    }
}

/// List the catalog.
fn list(format: OutputFormat) -> Result<String, StoaError> {
    match format {
        OutputFormat::Pretty => {
            let mut output = crate::output::format_catalog_pretty(MeditationTheme::all());
            output.push_str(&format!(
                "\n\n{}",
                "Start one with: stoa meditate start <title|number>".dimmed()
            ));
            Ok(output)
        }
        OutputFormat::Json => {
            let themes: Vec<_> = MeditationTheme::all()
                .iter()
                .map(|theme| {
                    json!({
                        "theme": theme.display_name(),
                        "description": theme.description(),
                        "sessions": theme.sessions(),
                    })
                })
                .collect();
            crate::output::to_json(&themes)
        }
    }
}

/// Resolve a session by title or 1-based catalog number.
fn resolve_session(selector: &str) -> Result<SessionSpec, StoaError> {
    if let Ok(index) = selector.parse::<usize>() {
        let all: Vec<SessionSpec> = MeditationTheme::all()
            .iter()
            .flat_map(|t| t.sessions().iter().copied())
            .collect();
        return index
            .checked_sub(1)
            .and_then(|i| all.get(i).copied())
            .ok_or_else(|| {
                StoaError::NotFound(format!(
                    "Session number {selector} (catalog has {})",
                    all.len()
                ))
            });
    }

    crate::meditation::find_session(selector)
        .map(|(_, spec)| spec)
        .ok_or_else(|| StoaError::NotFound(format!("Session \"{selector}\"")))
}

/// Run a meditation session interactively.
fn start(config: &Config, selector: &str, sound: Option<&str>) -> Result<String, StoaError> {
    let spec = resolve_session(selector)?;
    let mut player = SessionPlayer::new(&spec);

    match sound {
        Some("none") => player.select_track(None),
        Some(s) => {
            let track = AmbientTrack::parse(s)
                .ok_or_else(|| StoaError::NotFound(format!("Unknown ambient track: {s}")))?;
            player.select_track(Some(track));
        }
        None => {}
    }

    let mut ambient = CommandPlayer::new(&config.meditation)?;
    let mut session = PracticeSession::begin(PracticeKind::Meditation, player.title.clone());

    println!("{}", player.title.bold());
    if let Some(track) = player.track() {
        println!("{}", format!("Ambient: {track}").dimmed());
    }
    println!("{}", "space: play/pause | q: quit".dimmed());
    println!();

    enable_raw_mode().map_err(|e| StoaError::Terminal(format!("Failed to enter raw mode: {e}")))?;
    let result = run_loop(&mut player, &mut ambient);
    ambient.stop();
    disable_raw_mode().ok();
    println!();

    let finished = result?;
    session.completed = finished;
    session.duration_seconds = player.position();

    if let Err(e) = save_session(&mut session) {
        eprintln!("{}: {e}", "warning".yellow());
    }

    Ok(if finished {
        format!("Session complete: {} ({}).", player.title, player.format_total())
    } else {
        format!(
            "Stopped at {} of {}.",
            player.format_position(),
            player.format_total()
        )
    })
}

/// The interactive loop. Returns true if the session ran to its end.
fn run_loop(
    player: &mut SessionPlayer,
    ambient: &mut dyn AmbientPlayer,
) -> Result<bool, StoaError> {
    let mut ticker: Option<Ticker> = None;

    draw_status(player)?;

    loop {
        if event::poll(KEY_POLL)
            .map_err(|e| StoaError::Terminal(format!("Event poll failed: {e}")))?
        {
            if let Event::Key(key) = event::read()
                .map_err(|e| StoaError::Terminal(format!("Event read failed: {e}")))?
            {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    return Ok(false);
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                    KeyCode::Char(' ') => {
                        if player.is_playing() {
                            player.pause();
                            ticker = None;
                            ambient.stop();
                        } else if !player.is_finished() {
                            player.play();
                            ticker = Some(Ticker::start());
                            start_ambient(player, ambient);
                        }
                        draw_status(player)?;
                    }
                    _ => {}
                }
            }
        }

        if let Some(t) = &ticker {
            let mut finished = false;
            while t.try_tick() {
                if player.tick() {
                    finished = true;
                    break;
                }
                draw_status(player)?;
            }
            if finished {
                ambient.stop();
                draw_status(player)?;
                return Ok(true);
            }
        }
    }
}

/// Start the ambient track, downgrading failure to a status note.
fn start_ambient(player: &SessionPlayer, ambient: &mut dyn AmbientPlayer) {
    if let Some(track) = player.track() {
        if let Err(e) = ambient.play(track) {
            // Meditation continues in silence.
            eprintln!("\r\n{}: {e}\r", "warning".yellow());
        }
    }
}

fn draw_status(player: &SessionPlayer) -> Result<(), StoaError> {
    let mut stdout = std::io::stdout();
    execute!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))
        .map_err(|e| StoaError::Terminal(format!("Failed to draw: {e}")))?;

    let state = if player.is_finished() {
        "finished".green().to_string()
    } else if player.is_playing() {
        "meditating".bold().to_string()
    } else {
        "paused".dimmed().to_string()
    };

    let bar = progress_bar(player.progress(), 24);

    write!(
        stdout,
        "{}  {} / {}  {}",
        state,
        player.format_position(),
        player.format_total(),
        bar,
    )?;
    stdout.flush()?;

    Ok(())
}

/// Render a progress bar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

fn save_session(session: &mut PracticeSession) -> Result<(), StoaError> {
    if session.duration_seconds == 0 {
        return Ok(());
    }
    let storage = PracticeStorage::new()?;
    storage.save(session)
}
