//! Application state for the TUI.
//!
//! Tab and selection state is held here explicitly and passed into the
//! render functions; nothing lives in module-level globals. Switching
//! tabs tears down the leaving tab's timer state, matching the
//! unmount-and-discard lifecycle of the app's views.

use crate::articles::{Article, ArticleStorage};
use crate::breathing::{BreathingMethod, PhaseTimer, Tick};
use crate::config::{Config, Theme};
use crate::error::StoaError;
use crate::meditation::{AmbientPlayer, MeditationTheme, SessionPlayer, SessionSpec};
use crate::practice::{PracticeKind, PracticeReport, PracticeSession, PracticeStorage};

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Breathe,
    Meditate,
    Articles,
    Profile,
}

impl Tab {
    /// All tabs in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Home,
            Self::Breathe,
            Self::Meditate,
            Self::Articles,
            Self::Profile,
        ]
    }

    /// Tab title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Breathe => "Breathe",
            Self::Meditate => "Meditate",
            Self::Articles => "Articles",
            Self::Profile => "Profile",
        }
    }

    /// Position in the tab bar.
    #[must_use]
    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// The tab after this one, wrapping.
    #[must_use]
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// The tab before this one, wrapping.
    #[must_use]
    pub fn previous(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Application state.
pub struct App {
    /// Active tab.
    pub tab: Tab,
    /// UI theme, persisted to config on toggle.
    pub theme: Theme,
    /// Breathing phase timer for the Breathe tab.
    pub timer: PhaseTimer,
    /// Seconds of breathing practice since the tab was entered.
    breath_seconds: u32,
    /// Active meditation session, if one is running.
    pub player: Option<SessionPlayer>,
    /// Selection in the meditation catalog.
    pub meditation_selected: usize,
    /// Loaded article list.
    pub articles: Vec<Article>,
    /// Selection in the article list.
    pub article_selected: usize,
    /// Index of the article open in the reader, if any.
    pub reading: Option<usize>,
    /// Scroll offset within the reader.
    pub reading_scroll: u16,
    /// Practice statistics for Home and Profile.
    pub stats: PracticeReport,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,

    config: Config,
    article_storage: ArticleStorage,
    practice_storage: PracticeStorage,
    ambient: Box<dyn AmbientPlayer>,
}

impl App {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if articles or statistics cannot be loaded.
    pub fn new(
        config: Config,
        article_storage: ArticleStorage,
        practice_storage: PracticeStorage,
        ambient: Box<dyn AmbientPlayer>,
    ) -> Result<Self, StoaError> {
        let articles = article_storage.list()?;
        let stats = PracticeReport::generate(&practice_storage)?;

        Ok(Self {
            tab: Tab::Home,
            theme: config.general.theme,
            timer: PhaseTimer::new(config.breathing.default_method),
            breath_seconds: 0,
            player: None,
            meditation_selected: 0,
            articles,
            article_selected: 0,
            reading: None,
            reading_scroll: 0,
            stats,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
            config,
            article_storage,
            practice_storage,
            ambient,
        })
    }

    /// Switch tabs, tearing down the leaving tab's session state.
    pub fn set_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }

        match self.tab {
            Tab::Breathe => self.teardown_breathing(),
            Tab::Meditate => self.teardown_meditation(),
            _ => {}
        }

        self.tab = tab;
        self.reading = None;
        self.reading_scroll = 0;
        self.status = None;
    }

    /// Deliver one scheduler tick to whichever timer is running.
    pub fn on_tick(&mut self) {
        if self.timer.tick() != Tick::Idle {
            self.breath_seconds += 1;
        }

        let finished = self.player.as_mut().is_some_and(SessionPlayer::tick);
        if finished {
            self.ambient.stop();
            if let Some(player) = &self.player {
                self.status = Some(format!("Session complete: {}", player.title));
            }
            self.finish_meditation(true);
        }
    }

    // --- Breathe tab ---

    /// Toggle the breathing timer between running and paused.
    pub fn toggle_breathing(&mut self) {
        if self.timer.is_active() {
            self.timer.pause();
            self.status = Some("Paused".to_string());
        } else {
            self.timer.start();
            self.status = None;
        }
    }

    /// Reset the breathing timer.
    pub fn reset_breathing(&mut self) {
        self.record_breathing();
        self.timer.reset();
        self.status = Some("Reset".to_string());
    }

    /// Select the next method in the catalog (resets the timer).
    pub fn next_method(&mut self) {
        self.record_breathing();
        let all = BreathingMethod::all();
        let index = all
            .iter()
            .position(|m| *m == self.timer.method())
            .unwrap_or(0);
        let next = all[(index + 1) % all.len()];
        self.timer.select_method(next);
        self.status = Some(next.display_name().to_string());
    }

    fn teardown_breathing(&mut self) {
        self.record_breathing();
        self.timer.reset();
    }

    /// Persist breathing practice accumulated so far, if any.
    fn record_breathing(&mut self) {
        if self.breath_seconds == 0 {
            return;
        }

        let mut session = PracticeSession::begin(
            PracticeKind::Breathing,
            self.timer.method().display_name().to_string(),
        );
        session.duration_seconds = self.breath_seconds;
        session.cycles = self.timer.cycles();
        session.completed = self.timer.cycles() > 0;
        self.breath_seconds = 0;

        if let Err(e) = self.practice_storage.save(&mut session) {
            self.status = Some(format!("Could not save practice: {e}"));
        } else {
            self.refresh_stats();
        }
    }

    // --- Meditate tab ---

    /// Number of sessions in the flattened catalog.
    #[must_use]
    pub fn catalog_len(&self) -> usize {
        MeditationTheme::all()
            .iter()
            .map(|t| t.sessions().len())
            .sum()
    }

    /// The flattened catalog entry at an index.
    #[must_use]
    pub fn catalog_entry(&self, index: usize) -> Option<(MeditationTheme, SessionSpec)> {
        MeditationTheme::all()
            .iter()
            .flat_map(|t| t.sessions().iter().map(move |s| (*t, *s)))
            .nth(index)
    }

    /// Move the meditation selection down.
    pub fn meditation_next(&mut self) {
        if self.meditation_selected + 1 < self.catalog_len() {
            self.meditation_selected += 1;
        }
    }

    /// Move the meditation selection up.
    pub fn meditation_previous(&mut self) {
        self.meditation_selected = self.meditation_selected.saturating_sub(1);
    }

    /// Start the selected session, or toggle play/pause of the running one.
    pub fn meditation_activate(&mut self) {
        if let Some(player) = &mut self.player {
            if player.is_playing() {
                player.pause();
                self.ambient.stop();
                self.status = Some("Paused".to_string());
            } else if !player.is_finished() {
                player.play();
                let track = player.track();
                if let Some(track) = track {
                    if let Err(e) = self.ambient.play(track) {
                        self.status = Some(e.to_string());
                    }
                }
            }
            return;
        }

        let Some((_, spec)) = self.catalog_entry(self.meditation_selected) else {
            return;
        };

        let mut player = SessionPlayer::new(&spec);
        player.play();
        if let Err(e) = self.ambient.play(spec.track) {
            // Session runs silently; the failure is surfaced and dropped.
            self.status = Some(e.to_string());
        }
        self.player = Some(player);
    }

    /// Leave the running session and return to the catalog.
    pub fn meditation_back(&mut self) {
        self.teardown_meditation();
    }

    fn teardown_meditation(&mut self) {
        self.ambient.stop();
        self.finish_meditation(false);
    }

    /// Record the running session and drop the player.
    fn finish_meditation(&mut self, completed: bool) {
        let Some(player) = self.player.take() else {
            return;
        };

        if player.position() == 0 {
            return;
        }

        let mut session =
            PracticeSession::begin(PracticeKind::Meditation, player.title.clone());
        session.duration_seconds = player.position();
        session.completed = completed || player.is_finished();

        if let Err(e) = self.practice_storage.save(&mut session) {
            self.status = Some(format!("Could not save practice: {e}"));
        } else {
            self.refresh_stats();
        }
    }

    // --- Articles tab ---

    /// Reload the article list from storage.
    pub fn refresh_articles(&mut self) {
        match self.article_storage.list() {
            Ok(articles) => {
                self.articles = articles;
                if !self.articles.is_empty() && self.article_selected >= self.articles.len() {
                    self.article_selected = self.articles.len() - 1;
                }
                self.status = Some(format!("Loaded {} articles", self.articles.len()));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Move the article selection down.
    pub fn article_next(&mut self) {
        if !self.articles.is_empty() && self.article_selected < self.articles.len() - 1 {
            self.article_selected += 1;
        }
    }

    /// Move the article selection up.
    pub fn article_previous(&mut self) {
        self.article_selected = self.article_selected.saturating_sub(1);
    }

    /// Open the selected article in the reader.
    pub fn open_article(&mut self) {
        if self.article_selected < self.articles.len() {
            self.reading = Some(self.article_selected);
            self.reading_scroll = 0;
        }
    }

    /// Close the reader.
    pub fn close_article(&mut self) {
        self.reading = None;
        self.reading_scroll = 0;
    }

    /// Toggle the selected article's favorite flag.
    pub fn favorite_selected(&mut self) {
        let Some(article) = self.articles.get(self.article_selected) else {
            return;
        };
        let Some(id) = article.id else {
            return;
        };

        match self.article_storage.toggle_favorite(id) {
            Ok(now) => {
                if let Some(article) = self.articles.get_mut(self.article_selected) {
                    article.favorite = now;
                }
                self.status = Some(if now {
                    "Favorited".to_string()
                } else {
                    "Unfavorited".to_string()
                });
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    // --- Profile tab / shared ---

    /// Reload practice statistics.
    pub fn refresh_stats(&mut self) {
        if let Ok(stats) = PracticeReport::generate(&self.practice_storage) {
            self.stats = stats;
        }
    }

    /// Toggle the UI theme and persist the preference.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.general.theme = self.theme;
        if let Err(e) = self.config.save() {
            self.status = Some(format!("Theme not saved: {e}"));
        }
    }

    /// Record any in-flight practice and release audio. Called on quit.
    pub fn teardown(&mut self) {
        self.teardown_breathing();
        self.teardown_meditation();
    }
}
