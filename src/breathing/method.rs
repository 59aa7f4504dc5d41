//! Breathing method definitions.
//!
//! A method is a named, ordered sequence of phases with fixed durations.
//! The catalog is small and fixed; durations are validated by construction.

use serde::{Deserialize, Serialize};

/// One segment of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Breathe in.
    Inhale,
    /// Hold with full lungs.
    Hold,
    /// Breathe out.
    Exhale,
    /// Hold with empty lungs (box method only).
    HoldOut,
}

impl Phase {
    /// Short guidance text shown while this phase runs.
    #[must_use]
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::Inhale => "Breathe in deeply",
            Self::Hold => "Hold your breath",
            Self::Exhale => "Breathe out slowly",
            Self::HoldOut => "Hold, lungs empty",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
            Self::HoldOut => "Hold",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A phase paired with its duration in seconds.
///
/// Durations in the catalog are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpec {
    /// Which phase.
    pub phase: Phase,
    /// How long it runs, in whole seconds.
    pub seconds: u32,
}

/// A named breathing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingMethod {
    /// 4-7-8 relaxation breathing.
    #[serde(rename = "478")]
    FourSevenEight,
    /// Box breathing: four equal phases of four seconds.
    Box,
}

const FOUR_SEVEN_EIGHT: &[PhaseSpec] = &[
    PhaseSpec { phase: Phase::Inhale, seconds: 4 },
    PhaseSpec { phase: Phase::Hold, seconds: 7 },
    PhaseSpec { phase: Phase::Exhale, seconds: 8 },
];

const BOX: &[PhaseSpec] = &[
    PhaseSpec { phase: Phase::Inhale, seconds: 4 },
    PhaseSpec { phase: Phase::Hold, seconds: 4 },
    PhaseSpec { phase: Phase::Exhale, seconds: 4 },
    PhaseSpec { phase: Phase::HoldOut, seconds: 4 },
];

impl BreathingMethod {
    /// All methods in the catalog.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::FourSevenEight, Self::Box]
    }

    /// Stable identifier used on the command line and in config.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FourSevenEight => "478",
            Self::Box => "box",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FourSevenEight => "4-7-8 Breathing",
            Self::Box => "Box Breathing",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FourSevenEight => "Inhale 4s, hold 7s, exhale 8s",
            Self::Box => "Inhale 4s, hold 4s, exhale 4s, hold 4s",
        }
    }

    /// The ordered phase sequence.
    #[must_use]
    pub const fn phases(&self) -> &'static [PhaseSpec] {
        match self {
            Self::FourSevenEight => FOUR_SEVEN_EIGHT,
            Self::Box => BOX,
        }
    }

    /// Total seconds in one full cycle.
    #[must_use]
    pub fn cycle_seconds(&self) -> u32 {
        self.phases().iter().map(|p| p.seconds).sum()
    }

    /// Parse a method from its identifier or a common alias.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "478" | "4-7-8" => Some(Self::FourSevenEight),
            "box" | "4444" => Some(Self::Box),
            _ => None,
        }
    }
}

impl std::fmt::Display for BreathingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
