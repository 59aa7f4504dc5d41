//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::meditation::format_seconds;
use crate::output::markdown;
use crate::tui::app::{App, Tab};

/// Accent color for the active theme.
const fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
    }
}

/// Muted color for the active theme.
const fn muted(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: tab bar, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);

    match app.tab {
        Tab::Home => render_home(frame, app, chunks[1]),
        Tab::Breathe => render_breathe(frame, app, chunks[1]),
        Tab::Meditate => render_meditate(frame, app, chunks[1]),
        Tab::Articles => render_articles(frame, app, chunks[1]),
        Tab::Profile => render_profile(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

/// Render the tab bar.
fn render_tab_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line<'_>> = Tab::all().iter().map(|t| Line::from(t.title())).collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(muted(app.theme)))
        .highlight_style(
            Style::default()
                .fg(accent(app.theme))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" stoa ")
                .border_style(Style::default().fg(accent(app.theme))),
        );

    frame.render_widget(tabs, area);
}

/// Render the home tab.
fn render_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stats = &app.stats;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome back",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Today: {} min across {} sessions",
            stats.today_minutes, stats.today_sessions
        )),
        Line::from(format!("Streak: {} days", stats.streak_days)),
        Line::from(""),
        Line::from(Span::styled(
            "Quick start",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  b  Breathing exercise"),
        Line::from("  m  Guided meditation"),
        Line::from("  a  Read articles"),
    ];

    let home = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(muted(app.theme))),
    );

    frame.render_widget(home, area);
}

/// Render the breathing tab: phase gauge, countdown and cycle count.
fn render_breathe(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Method header
            Constraint::Length(5), // Phase + countdown
            Constraint::Length(3), // Gauge
            Constraint::Min(0),    // Phase dots + cycles
        ])
        .split(area);

    let method = app.timer.method();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            method.display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            method.description(),
            Style::default().fg(muted(app.theme)),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(muted(app.theme))),
    );
    frame.render_widget(header, chunks[0]);

    let guidance = if app.timer.is_active() {
        app.timer.phase().guidance().to_string()
    } else {
        "Press space to begin".to_string()
    };
    let countdown = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            guidance,
            Style::default()
                .fg(accent(app.theme))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}s", app.timer.remaining())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(countdown, chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent(app.theme)))
        .ratio(app.timer.phase_progress())
        .label(app.timer.phase().label());
    frame.render_widget(gauge, chunks[2]);

    // One dot per phase, the current one highlighted.
    let dots: Vec<Span<'_>> = method
        .phases()
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i == app.timer.phase_index() {
                Span::styled("● ", Style::default().fg(accent(app.theme)))
            } else {
                Span::styled("○ ", Style::default().fg(muted(app.theme)))
            }
        })
        .collect();

    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(dots),
        Line::from(""),
        Line::from(format!("{} completed cycles", app.timer.cycles())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}

/// Render the meditation tab: catalog list or the running player.
fn render_meditate(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(player) = &app.player {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title + clock
                Constraint::Length(3), // Progress
                Constraint::Min(0),
            ])
            .split(area);

        let state = if player.is_finished() {
            "Finished"
        } else if player.is_playing() {
            "Meditating..."
        } else {
            "Paused"
        };

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                player.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} / {}",
                player.format_position(),
                player.format_total()
            )),
            Line::from(Span::styled(state, Style::default().fg(muted(app.theme)))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(muted(app.theme))),
        );
        frame.render_widget(header, chunks[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent(app.theme)))
            .ratio(player.progress())
            .label(format!("{:.0}%", player.progress() * 100.0));
        frame.render_widget(gauge, chunks[1]);

        let track = player
            .track()
            .map_or_else(|| "No ambient sound".to_string(), |t| format!("Ambient: {t}"));
        let footer = Paragraph::new(track)
            .alignment(Alignment::Center)
            .style(Style::default().fg(muted(app.theme)));
        frame.render_widget(footer, chunks[2]);
        return;
    }

    let mut items: Vec<ListItem<'_>> = Vec::new();
    let mut flat_index = 0usize;
    for theme in crate::meditation::MeditationTheme::all() {
        items.push(
            ListItem::new(Line::from(Span::styled(
                theme.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .style(Style::default().fg(accent(app.theme))),
        );

        for spec in theme.sessions() {
            let selected = flat_index == app.meditation_selected;
            let marker = if selected { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(spec.title),
                Span::styled(
                    format!("  {}", format_seconds(spec.total_seconds())),
                    Style::default().fg(muted(app.theme)),
                ),
                Span::styled(
                    format!("  {}", spec.track),
                    Style::default().fg(muted(app.theme)),
                ),
            ]);

            let style = if selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            items.push(ListItem::new(line).style(style));
            flat_index += 1;
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sessions ")
            .border_style(Style::default().fg(muted(app.theme))),
    );

    frame.render_widget(list, area);
}

/// Render the articles tab: list or reader.
fn render_articles(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(index) = app.reading {
        if let Some(article) = app.articles.get(index) {
            let body = markdown::render(&article.body);
            let title = format!(
                " {} ({} • {}) ",
                article.title, article.read_time, article.category
            );

            let reader = Paragraph::new(body)
                .wrap(Wrap { trim: false })
                .scroll((app.reading_scroll, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title)
                        .border_style(Style::default().fg(accent(app.theme))),
                );

            frame.render_widget(reader, area);
        }
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .articles
        .iter()
        .enumerate()
        .map(|(i, article)| {
            let is_selected = i == app.article_selected;

            let favorite = if article.favorite {
                Span::styled("♥ ", Style::default().fg(Color::Red))
            } else {
                Span::raw("  ")
            };

            let mut spans = vec![
                favorite,
                Span::styled(
                    article.title.clone(),
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  {}", article.read_time),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  {}", article.category),
                    Style::default().fg(muted(app.theme)),
                ),
            ];

            if article.seeded {
                spans.push(Span::styled(
                    "  built-in",
                    Style::default().fg(accent(app.theme)),
                ));
            }

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Articles ({}) ", app.articles.len()))
                .border_style(Style::default().fg(muted(app.theme))),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.article_selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the profile tab.
fn render_profile(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stats = &app.stats;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Practice",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Today:       {} min", stats.today_minutes)),
        Line::from(format!("  Sessions:    {}", stats.today_sessions)),
        Line::from(format!("  Streak:      {} days", stats.streak_days)),
        Line::from(""),
        Line::from(Span::styled(
            "Lifetime",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Minutes:     {}", stats.total_minutes)),
        Line::from(format!("  Sessions:    {}", stats.total_sessions)),
        Line::from(format!("  Cycles:      {}", stats.total_cycles)),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Theme: {:?} (press t to toggle)", app.theme),
            Style::default().fg(muted(app.theme)),
        )),
    ];

    let profile = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(muted(app.theme))),
    );

    frame.render_widget(profile, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Tab: switch | 1-5: jump | t: theme | ?: help | q: quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(muted(app.theme)));

    frame.render_widget(status, area);
}
