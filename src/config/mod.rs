//! Configuration for stoa.
//!
//! Paths under `~/.stoa/` and YAML-backed settings, including the
//! persisted UI theme preference.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    BreathingConfig, ColorSetting, Config, GeneralConfig, MeditationConfig, NarrationConfig, Theme,
};
