//! The meditation session player.
//!
//! A count-up timer over a fixed session length. Like the breathing
//! timer it advances one second per tick while playing; reaching the
//! total duration stops playback and clamps the position.

use serde::{Deserialize, Serialize};

use super::catalog::SessionSpec;
use super::sound::AmbientTrack;

/// Playback state for one meditation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPlayer {
    /// Session title, for display and the practice log.
    pub title: String,
    total_seconds: u32,
    position: u32,
    playing: bool,
    /// Selected ambient track, if any.
    track: Option<AmbientTrack>,
}

impl SessionPlayer {
    /// Create a player for a catalog session.
    #[must_use]
    pub fn new(spec: &SessionSpec) -> Self {
        Self {
            title: spec.title.to_string(),
            total_seconds: spec.total_seconds(),
            position: 0,
            playing: false,
            track: Some(spec.track),
        }
    }

    /// Create a player with an explicit length in seconds.
    #[must_use]
    pub fn with_duration(title: String, total_seconds: u32) -> Self {
        Self {
            title,
            total_seconds,
            position: 0,
            playing: false,
            track: None,
        }
    }

    /// Begin or resume playback. No effect once the session finished.
    pub fn play(&mut self) {
        if self.position < self.total_seconds {
            self.playing = true;
        }
    }

    /// Pause playback, retaining the position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advance one second. Returns true when the session just finished.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }

        self.position += 1;
        if self.position >= self.total_seconds {
            self.position = self.total_seconds;
            self.playing = false;
            return true;
        }

        false
    }

    /// Replace the ambient track selection.
    pub fn select_track(&mut self, track: Option<AmbientTrack>) {
        self.track = track;
    }

    /// The selected ambient track.
    #[must_use]
    pub const fn track(&self) -> Option<AmbientTrack> {
        self.track
    }

    /// Whether playback is running.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the session reached its full length.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.position >= self.total_seconds
    }

    /// Seconds elapsed.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Session length in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Progress through the session (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        f64::from(self.position) / f64::from(self.total_seconds)
    }

    /// Format the current position as M:SS.
    #[must_use]
    pub fn format_position(&self) -> String {
        format_seconds(self.position)
    }

    /// Format the session length as M:SS.
    #[must_use]
    pub fn format_total(&self) -> String {
        format_seconds(self.total_seconds)
    }
}

/// Format seconds as M:SS.
#[must_use]
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meditation::catalog::MeditationTheme;

    fn ten_minute_player() -> SessionPlayer {
        SessionPlayer::new(&MeditationTheme::Stress.sessions()[0])
    }

    #[test]
    fn test_new_player_at_rest() {
        let player = ten_minute_player();
        assert_eq!(player.position(), 0);
        assert_eq!(player.total_seconds(), 600);
        assert!(!player.is_playing());
        assert_eq!(player.track(), Some(AmbientTrack::Rain));
    }

    #[test]
    fn test_tick_only_while_playing() {
        let mut player = ten_minute_player();
        assert!(!player.tick());
        assert_eq!(player.position(), 0);

        player.play();
        assert!(!player.tick());
        assert_eq!(player.position(), 1);
    }

    #[test]
    fn test_pause_retains_position() {
        let mut player = ten_minute_player();
        player.play();
        for _ in 0..30 {
            player.tick();
        }

        player.pause();
        assert!(!player.tick());
        assert_eq!(player.position(), 30);

        player.play();
        player.tick();
        assert_eq!(player.position(), 31);
    }

    #[test]
    fn test_finishes_and_clamps() {
        let mut player = SessionPlayer::with_duration("Short".to_string(), 3);
        player.play();

        assert!(!player.tick());
        assert!(!player.tick());
        assert!(player.tick()); // third tick finishes

        assert!(player.is_finished());
        assert!(!player.is_playing());
        assert_eq!(player.position(), 3);

        // Further play/tick is inert.
        player.play();
        assert!(!player.is_playing());
        assert!(!player.tick());
        assert_eq!(player.position(), 3);
    }

    #[test]
    fn test_progress() {
        let mut player = SessionPlayer::with_duration("Half".to_string(), 10);
        player.play();
        for _ in 0..5 {
            player.tick();
        }
        assert!((player.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_position() {
        let mut player = SessionPlayer::with_duration("Fmt".to_string(), 600);
        assert_eq!(player.format_position(), "0:00");
        assert_eq!(player.format_total(), "10:00");

        player.play();
        for _ in 0..65 {
            player.tick();
        }
        assert_eq!(player.format_position(), "1:05");
    }
}
