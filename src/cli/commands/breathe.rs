//! Breathing command implementation.
//!
//! Runs the guided breathing loop in the terminal: a ticker advances
//! the phase timer once per second while keys pause, reset or quit.
//! The ticker is dropped on pause and on exit so a torn-down session
//! never keeps ticking.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute};
use serde_json::json;

use crate::breathing::{BreathingMethod, PhaseTimer, Tick, Ticker};
use crate::cli::args::{BreatheCommands, OutputFormat};
use crate::config::Config;
use crate::error::StoaError;
use crate::practice::{PracticeKind, PracticeSession, PracticeStorage};

/// How long to block on the keyboard between ticker polls.
const KEY_POLL: Duration = Duration::from_millis(50);

/// Execute breathe subcommands.
pub fn breathe(
    config: &Config,
    cmd: BreatheCommands,
    format: OutputFormat,
) -> Result<String, StoaError> {
    match cmd {
        BreatheCommands::Methods => methods(format),
        BreatheCommands::Start { method, cycles } => start(config, method, cycles),
    }
}

/// List the method catalog.
fn methods(format: OutputFormat) -> Result<String, StoaError> {
    match format {
        OutputFormat::Pretty => Ok(crate::output::format_methods_pretty(BreathingMethod::all())),
        OutputFormat::Json => {
            let items: Vec<_> = BreathingMethod::all()
                .iter()
                .map(|m| {
                    json!({
                        "id": m.id(),
                        "name": m.display_name(),
                        "description": m.description(),
                        "phases": m.phases(),
                        "cycleSeconds": m.cycle_seconds(),
                    })
                })
                .collect();
            crate::output::to_json(&json!({ "count": items.len(), "items": items }))
        }
    }
}

/// Run a guided breathing session interactively.
fn start(
    config: &Config,
    method: Option<String>,
    cycles: Option<u32>,
) -> Result<String, StoaError> {
    let method = match method {
        Some(ref s) => BreathingMethod::parse(s)
            .ok_or_else(|| StoaError::NotFound(format!("Unknown breathing method: {s}")))?,
        None => config.breathing.default_method,
    };
    let target_cycles = cycles.unwrap_or(config.breathing.target_cycles);

    let mut timer = PhaseTimer::new(method);
    let mut session =
        PracticeSession::begin(PracticeKind::Breathing, method.display_name().to_string());

    println!("{}", method.display_name().bold());
    println!("{}", method.description().dimmed());
    if target_cycles > 0 {
        println!("Target: {target_cycles} cycles");
    }
    println!(
        "{}",
        "space: start/pause | r: reset | q: quit".dimmed()
    );
    println!();

    enable_raw_mode().map_err(|e| StoaError::Terminal(format!("Failed to enter raw mode: {e}")))?;
    let result = run_loop(&mut timer, &mut session, target_cycles);
    disable_raw_mode().ok();
    println!();

    let reached_target = result?;
    session.cycles = timer.cycles();
    session.completed = reached_target || session.cycles > 0;

    if let Err(e) = save_session(&mut session) {
        // The practice log is best-effort; the session itself succeeded.
        eprintln!("{}: {e}", "warning".yellow());
    }

    Ok(format!(
        "Completed {} cycle{} in {}:{:02}.",
        session.cycles,
        if session.cycles == 1 { "" } else { "s" },
        session.duration_seconds / 60,
        session.duration_seconds % 60,
    ))
}

/// The interactive loop. Returns true if the cycle target was reached.
fn run_loop(
    timer: &mut PhaseTimer,
    session: &mut PracticeSession,
    target_cycles: u32,
) -> Result<bool, StoaError> {
    // Held only while the timer runs; dropping it cancels the tick thread.
    let mut ticker: Option<Ticker> = None;

    draw_status(timer)?;

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
                        if timer.is_active() {
                            timer.pause();
                            ticker = None;
                        } else {
                            timer.start();
                            ticker = Some(Ticker::start());
                        }
                        draw_status(timer)?;
                    }
                    KeyCode::Char('r') => {
                        timer.reset();
                        ticker = None;
                        draw_status(timer)?;
                    }
                    _ => {}
                }
            }
        }

        if let Some(t) = &ticker {
            while t.try_tick() {
                if timer.tick() != Tick::Idle {
                    session.duration_seconds += 1;
                }
                draw_status(timer)?;

                if target_cycles > 0 && timer.cycles() >= target_cycles {
                    return Ok(true);
                }
            }
        }
    }
}

/// Redraw the single status line.
fn draw_status(timer: &PhaseTimer) -> Result<(), StoaError> {
    let mut stdout = std::io::stdout();
    execute!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))
        .map_err(|e| StoaError::Terminal(format!("Failed to draw: {e}")))?;

    let state = if timer.is_active() {
        timer.phase().guidance().bold().to_string()
    } else {
        "paused".dimmed().to_string()
    };

    write!(
        stdout,
        "{}  {:>2}s left  cycle {}",
        state,
        timer.remaining(),
        timer.cycles() + 1,
    )?;
    stdout.flush()?;

    Ok(())
}

fn save_session(session: &mut PracticeSession) -> Result<(), StoaError> {
    if session.duration_seconds == 0 {
        return Ok(());
    }
    let storage = PracticeStorage::new()?;
    storage.save(session)
}
