//! The meditation session catalog.
//!
//! Three themes, each with a fixed set of ambient-sound sessions.

use serde::{Deserialize, Serialize};

use super::sound::AmbientTrack;

/// Meditation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeditationTheme {
    /// Unwinding with natural soundscapes.
    Stress,
    /// Background noise for concentration.
    Focus,
    /// Soothing sounds for falling asleep.
    Sleep,
}

impl MeditationTheme {
    /// All themes, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Stress, Self::Focus, Self::Sleep]
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Stress => "Stress Relief",
            Self::Focus => "Deep Focus",
            Self::Sleep => "Sleep",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Stress => "Natural sounds to relax body and mind",
            Self::Focus => "Background noise that sharpens concentration",
            Self::Sleep => "Soothing sounds to help you drift off",
        }
    }

    /// The sessions offered under this theme.
    #[must_use]
    pub const fn sessions(&self) -> &'static [SessionSpec] {
        match self {
            Self::Stress => STRESS_SESSIONS,
            Self::Focus => FOCUS_SESSIONS,
            Self::Sleep => SLEEP_SESSIONS,
        }
    }

    /// Parse from an identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stress" => Some(Self::Stress),
            "focus" => Some(Self::Focus),
            "sleep" => Some(Self::Sleep),
            _ => None,
        }
    }
}

impl std::fmt::Display for MeditationTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One entry in the session catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSpec {
    /// Session title.
    pub title: &'static str,
    /// Length in minutes.
    pub minutes: u32,
    /// Default ambient track for this session.
    pub track: AmbientTrack,
}

impl SessionSpec {
    /// Session length in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.minutes * 60
    }
}

const STRESS_SESSIONS: &[SessionSpec] = &[
    SessionSpec { title: "Rain Relaxation", minutes: 10, track: AmbientTrack::Rain },
    SessionSpec { title: "Forest Ambience", minutes: 15, track: AmbientTrack::Forest },
    SessionSpec { title: "Ocean Waves", minutes: 12, track: AmbientTrack::Ocean },
];

const FOCUS_SESSIONS: &[SessionSpec] = &[
    SessionSpec { title: "White Noise Focus", minutes: 8, track: AmbientTrack::WhiteNoise },
    SessionSpec { title: "Brown Noise Deep Work", minutes: 20, track: AmbientTrack::BrownNoise },
    SessionSpec { title: "Pink Noise Thinking", minutes: 15, track: AmbientTrack::PinkNoise },
];

const SLEEP_SESSIONS: &[SessionSpec] = &[
    SessionSpec { title: "Bedtime White Noise", minutes: 12, track: AmbientTrack::WhiteNoise },
    SessionSpec { title: "Deep Sleep Sounds", minutes: 25, track: AmbientTrack::Ocean },
    SessionSpec { title: "Midday Rest", minutes: 6, track: AmbientTrack::Rain },
];

/// Look up a session across all themes by title (case-insensitive).
#[must_use]
pub fn find_session(title: &str) -> Option<(MeditationTheme, SessionSpec)> {
    for theme in MeditationTheme::all() {
        for spec in theme.sessions() {
            if spec.title.eq_ignore_ascii_case(title) {
                return Some((*theme, *spec));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_sessions() {
        for theme in MeditationTheme::all() {
            assert_eq!(theme.sessions().len(), 3, "{theme}");
            for spec in theme.sessions() {
                assert!(spec.minutes > 0);
            }
        }
    }

    #[test]
    fn test_find_session() {
        let (theme, spec) = find_session("rain relaxation").unwrap();
        assert_eq!(theme, MeditationTheme::Stress);
        assert_eq!(spec.minutes, 10);
        assert_eq!(spec.track, AmbientTrack::Rain);

        assert!(find_session("nonexistent").is_none());
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(MeditationTheme::parse("focus"), Some(MeditationTheme::Focus));
        assert_eq!(MeditationTheme::parse("SLEEP"), Some(MeditationTheme::Sleep));
        assert_eq!(MeditationTheme::parse("anger"), None);
    }

    #[test]
    fn test_total_seconds() {
        let spec = SessionSpec {
            title: "t",
            minutes: 10,
            track: AmbientTrack::Rain,
        };
        assert_eq!(spec.total_seconds(), 600);
    }
}
