//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::StoaError;
use crate::tui::app::{App, Tab};

/// Handle terminal events, waiting at most `timeout`.
///
/// Key presses mutate the app state directly; the caller owns the tick
/// cadence and redraw loop.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<(), StoaError> {
    if !event::poll(timeout).map_err(|e| StoaError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(());
    }

    if let Event::Key(key) =
        event::read().map_err(|e| StoaError::Terminal(format!("Event read failed: {e}")))?
    {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.should_quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
            }

            // Tab navigation
            KeyCode::Tab => app.set_tab(app.tab.next()),
            KeyCode::BackTab => app.set_tab(app.tab.previous()),
            KeyCode::Char('1') => app.set_tab(Tab::Home),
            KeyCode::Char('2') => app.set_tab(Tab::Breathe),
            KeyCode::Char('3') => app.set_tab(Tab::Meditate),
            KeyCode::Char('4') => app.set_tab(Tab::Articles),
            KeyCode::Char('5') => app.set_tab(Tab::Profile),

            // Theme toggle
            KeyCode::Char('t') => app.toggle_theme(),

            // Help
            KeyCode::Char('?') => {
                app.status = Some(help_line(app.tab).to_string());
            }

            _ => handle_tab_key(app, key.code),
        }
    }

    Ok(())
}

/// Keys that depend on the active tab.
fn handle_tab_key(app: &mut App, code: KeyCode) {
    match app.tab {
        Tab::Home => match code {
            KeyCode::Char('b') => app.set_tab(Tab::Breathe),
            KeyCode::Char('m') => app.set_tab(Tab::Meditate),
            KeyCode::Char('a') => app.set_tab(Tab::Articles),
            _ => {}
        },

        Tab::Breathe => match code {
            KeyCode::Char(' ') => app.toggle_breathing(),
            KeyCode::Char('r') => app.reset_breathing(),
            KeyCode::Char('m') => app.next_method(),
            _ => {}
        },

        Tab::Meditate => match code {
            KeyCode::Char('j') | KeyCode::Down => {
                if app.player.is_none() {
                    app.meditation_next();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if app.player.is_none() {
                    app.meditation_previous();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.meditation_activate(),
            KeyCode::Esc => app.meditation_back(),
            _ => {}
        },

        Tab::Articles => {
            if app.reading.is_some() {
                match code {
                    KeyCode::Esc | KeyCode::Char('h') => app.close_article(),
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.reading_scroll = app.reading_scroll.saturating_add(1);
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        app.reading_scroll = app.reading_scroll.saturating_sub(1);
                    }
                    KeyCode::Char('f') => app.favorite_selected(),
                    _ => {}
                }
            } else {
                match code {
                    KeyCode::Char('j') | KeyCode::Down => app.article_next(),
                    KeyCode::Char('k') | KeyCode::Up => app.article_previous(),
                    KeyCode::Enter => app.open_article(),
                    KeyCode::Char('f') => app.favorite_selected(),
                    KeyCode::Char('r') => app.refresh_articles(),
                    _ => {}
                }
            }
        }

        Tab::Profile => {
            if code == KeyCode::Char('r') {
                app.refresh_stats();
                app.status = Some("Refreshed".to_string());
            }
        }
    }
}

/// Per-tab help text.
const fn help_line(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "b/m/a: quick start | Tab: next tab | t: theme | q: quit",
        Tab::Breathe => "space: start/pause | r: reset | m: method | q: quit",
        Tab::Meditate => "j/k: select | Enter: play/pause | Esc: back | q: quit",
        Tab::Articles => "j/k: nav | Enter: read | f: favorite | r: refresh | q: quit",
        Tab::Profile => "r: refresh | Tab: next tab | q: quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_line_per_tab() {
        for tab in Tab::all() {
            assert!(help_line(*tab).contains("q: quit"));
        }
    }
}
