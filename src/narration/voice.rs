//! Voice profiles for narration.

use serde::{Deserialize, Serialize};

/// Baseline speaking rate in words per minute that profile rates scale.
const BASE_WPM: f32 = 175.0;

/// A named voice configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceProfile {
    #[default]
    Default,
    Male,
    Female,
    Calm,
    Warm,
}

impl VoiceProfile {
    /// All profiles, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::Male,
            Self::Female,
            Self::Calm,
            Self::Warm,
        ]
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Calm => "Calm",
            Self::Warm => "Warm",
        }
    }

    /// Rate multiplier relative to normal speech.
    #[must_use]
    pub const fn rate(&self) -> f32 {
        match self {
            Self::Default | Self::Female => 0.9,
            Self::Male => 0.8,
            Self::Calm => 0.7,
            Self::Warm => 0.85,
        }
    }

    /// Pitch multiplier relative to the voice's natural pitch.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        match self {
            Self::Default => 1.0,
            Self::Male => 0.8,
            Self::Female => 1.2,
            Self::Calm => 0.9,
            Self::Warm => 1.1,
        }
    }

    /// Speaking rate in words per minute.
    #[must_use]
    pub fn words_per_minute(&self) -> u32 {
        (self.rate() * BASE_WPM).round() as u32
    }

    /// Parse from an identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "calm" => Some(Self::Calm),
            "warm" => Some(Self::Warm),
            _ => None,
        }
    }
}

impl std::fmt::Display for VoiceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calm_is_slowest() {
        for profile in VoiceProfile::all() {
            assert!(VoiceProfile::Calm.rate() <= profile.rate());
        }
    }

    #[test]
    fn test_words_per_minute() {
        assert_eq!(VoiceProfile::Default.words_per_minute(), 158);
        assert_eq!(VoiceProfile::Calm.words_per_minute(), 123);
    }

    #[test]
    fn test_parse() {
        assert_eq!(VoiceProfile::parse("calm"), Some(VoiceProfile::Calm));
        assert_eq!(VoiceProfile::parse("WARM"), Some(VoiceProfile::Warm));
        assert_eq!(VoiceProfile::parse("robot"), None);
    }
}
