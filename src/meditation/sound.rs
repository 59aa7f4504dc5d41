//! Ambient audio tracks and playback.
//!
//! Tracks are named looping sound files under `~/.stoa/audio/`. Playback
//! goes through a user-configurable player command so the core never
//! links an audio stack; the child process is killed on stop and on drop.

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::config::MeditationConfig;
use crate::config::Paths;
use crate::error::StoaError;

/// A named ambient sound track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientTrack {
    Rain,
    Forest,
    Ocean,
    #[serde(rename = "whitenoise")]
    WhiteNoise,
    #[serde(rename = "brownian")]
    BrownNoise,
    #[serde(rename = "pink")]
    PinkNoise,
}

impl AmbientTrack {
    /// All tracks, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Rain,
            Self::Forest,
            Self::Ocean,
            Self::WhiteNoise,
            Self::BrownNoise,
            Self::PinkNoise,
        ]
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Rain => "Rain",
            Self::Forest => "Forest",
            Self::Ocean => "Ocean",
            Self::WhiteNoise => "White Noise",
            Self::BrownNoise => "Brown Noise",
            Self::PinkNoise => "Pink Noise",
        }
    }

    /// File name under the audio directory.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Rain => "rain.mp3",
            Self::Forest => "forest.mp3",
            Self::Ocean => "ocean.mp3",
            Self::WhiteNoise => "whitenoise.mp3",
            Self::BrownNoise => "brownian.mp3",
            Self::PinkNoise => "pink.mp3",
        }
    }

    /// Parse from an identifier or display name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "rain" => Some(Self::Rain),
            "forest" => Some(Self::Forest),
            "ocean" => Some(Self::Ocean),
            "white" | "whitenoise" => Some(Self::WhiteNoise),
            "brown" | "brownnoise" | "brownian" => Some(Self::BrownNoise),
            "pink" | "pinknoise" => Some(Self::PinkNoise),
            _ => None,
        }
    }
}

impl std::fmt::Display for AmbientTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Something that can loop an ambient track.
#[cfg_attr(test, mockall::automock)]
pub trait AmbientPlayer {
    /// Start looping the given track, replacing any current playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the track file is missing or the player
    /// cannot be spawned.
    fn play(&mut self, track: AmbientTrack) -> Result<(), StoaError>;

    /// Stop playback. No effect if nothing is playing.
    fn stop(&mut self);

    /// Whether a track is currently playing.
    fn is_playing(&mut self) -> bool;
}

/// Ambient playback through an external player command.
pub struct CommandPlayer {
    player: String,
    audio_dir: PathBuf,
    volume: u8,
    child: Option<Child>,
}

impl CommandPlayer {
    /// Create a player from settings, resolving the default audio
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new(config: &MeditationConfig) -> Result<Self, StoaError> {
        let paths = Paths::new()?;
        Ok(Self::with_audio_dir(config, paths.audio))
    }

    /// Create a player with an explicit audio directory.
    #[must_use]
    pub fn with_audio_dir(config: &MeditationConfig, audio_dir: PathBuf) -> Self {
        Self {
            player: config.audio_player.clone(),
            audio_dir,
            volume: config.ambient_volume,
            child: None,
        }
    }
}

impl AmbientPlayer for CommandPlayer {
    fn play(&mut self, track: AmbientTrack) -> Result<(), StoaError> {
        self.stop();

        let path = self.audio_dir.join(track.file_name());
        if !path.exists() {
            return Err(StoaError::Audio(format!(
                "Track file not found: {} (place sound files under {})",
                path.display(),
                self.audio_dir.display()
            )));
        }

        let child = Command::new(&self.player)
            .arg("--really-quiet")
            .arg("--loop=inf")
            .arg(format!("--volume={}", self.volume))
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                StoaError::Audio(format!("Failed to start audio player {}: {e}", self.player))
            })?;

        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn is_playing(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                Ok(Some(_)) | Err(_) => {
                    self.child = None;
                    false
                }
            },
            None => false,
        }
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
