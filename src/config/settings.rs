//! Configuration settings for stoa.
//!
//! Settings are loaded from `~/.stoa/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::breathing::BreathingMethod;
use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::StoaError;
use crate::narration::VoiceProfile;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Breathing practice settings.
    pub breathing: BreathingConfig,
    /// Meditation playback settings.
    pub meditation: MeditationConfig,
    /// Article narration settings.
    pub narration: NarrationConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// UI theme for the TUI shell.
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// UI theme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds.
    Light,
    /// Dark backgrounds.
    Dark,
}

impl Theme {
    /// Toggle between light and dark.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Breathing practice settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    /// Method selected when none is given on the command line.
    #[serde(default = "default_method")]
    pub default_method: BreathingMethod,
    /// Stop automatically after this many cycles (0 = run until quit).
    #[serde(default)]
    pub target_cycles: u32,
}

/// Meditation playback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeditationConfig {
    /// Command used to play ambient audio files.
    #[serde(default = "default_audio_player")]
    pub audio_player: String,
    /// Ambient track volume (0-100).
    #[serde(default = "default_ambient_volume")]
    pub ambient_volume: u8,
}

/// Article narration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Speech synthesis command.
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
    /// Default voice profile.
    #[serde(default)]
    pub voice: VoiceProfile,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_theme() -> Theme {
    Theme::Dark
}

const fn default_method() -> BreathingMethod {
    BreathingMethod::FourSevenEight
}

fn default_audio_player() -> String {
    "mpv".to_string()
}

const fn default_ambient_volume() -> u8 {
    40
}

fn default_speech_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak".to_string()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            theme: default_theme(),
        }
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            target_cycles: 0,
        }
    }
}

impl Default for MeditationConfig {
    fn default() -> Self {
        Self {
            audio_player: default_audio_player(),
            ambient_volume: default_ambient_volume(),
        }
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            speech_command: default_speech_command(),
            voice: VoiceProfile::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, StoaError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, StoaError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StoaError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            StoaError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), StoaError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), StoaError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| StoaError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            StoaError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.general.theme, Theme::Dark);
        assert_eq!(
            config.breathing.default_method,
            BreathingMethod::FourSevenEight
        );
        assert_eq!(config.meditation.ambient_volume, 40);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.theme, Theme::Dark);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.general.theme = Theme::Light;
        config.breathing.default_method = BreathingMethod::Box;
        config.meditation.ambient_volume = 70;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.general.theme, Theme::Light);
        assert_eq!(loaded.breathing.default_method, BreathingMethod::Box);
        assert_eq!(loaded.meditation.ambient_volume, 70);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
breathing:
  default_method: box
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.breathing.default_method, BreathingMethod::Box);
        // Defaults should be used for missing fields
        assert_eq!(config.general.theme, Theme::Dark);
        assert_eq!(config.meditation.ambient_volume, 40);
    }
}
