//! Narration through the system speech command.
//!
//! Text is fed to `say` (macOS) or `espeak` via stdin; rate and pitch
//! come from the voice profile. The child is killed on stop and on drop.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use crate::config::NarrationConfig;
use crate::error::StoaError;

use super::voice::VoiceProfile;
use super::Narrator;

/// Narration backed by an external speech-synthesis command.
pub struct SpeechCommand {
    command: String,
    child: Option<Child>,
}

impl SpeechCommand {
    /// Create a backend from settings.
    #[must_use]
    pub fn new(config: &NarrationConfig) -> Self {
        Self {
            command: config.speech_command.clone(),
            child: None,
        }
    }

    /// Command-line arguments for the given voice, depending on which
    /// speech program is configured.
    fn voice_args(&self, voice: VoiceProfile) -> Vec<String> {
        let program = std::path::Path::new(&self.command)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.command);

        match program {
            // say(1) only takes a rate; pitch is part of the voice.
            "say" => vec!["-r".to_string(), voice.words_per_minute().to_string()],
            // espeak pitch runs 0-99 around a default of 50.
            "espeak" | "espeak-ng" => vec![
                "-s".to_string(),
                voice.words_per_minute().to_string(),
                "-p".to_string(),
                ((voice.pitch() * 50.0).round() as u32).min(99).to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

impl Narrator for SpeechCommand {
    fn speak(&mut self, text: &str, voice: VoiceProfile) -> Result<(), StoaError> {
        self.stop();

        let mut child = Command::new(&self.command)
            .args(self.voice_args(voice))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                StoaError::Narration(format!(
                    "Failed to start speech command {}: {e}",
                    self.command
                ))
            })?;

        if let Some(stdin) = child.stdin.take() {
            let mut stdin = stdin;
            stdin.write_all(text.as_bytes()).map_err(|e| {
                StoaError::Narration(format!("Failed to send text to speech command: {e}"))
            })?;
            // Dropping stdin closes the pipe so the command starts speaking.
        }

        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
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

    fn wait(&mut self) -> Result<(), StoaError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        let status = child
            .wait()
            .map_err(|e| StoaError::Narration(format!("Speech command failed: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(StoaError::Narration(format!(
                "Speech command exited with {status}"
            )))
        }
    }
}

impl Drop for SpeechCommand {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(command: &str) -> SpeechCommand {
        SpeechCommand {
            command: command.to_string(),
            child: None,
        }
    }

    #[test]
    fn test_say_args() {
        let speech = backend("say");
        let args = speech.voice_args(VoiceProfile::Calm);
        assert_eq!(args, vec!["-r", "123"]);
    }

    #[test]
    fn test_espeak_args() {
        let speech = backend("/usr/bin/espeak");
        let args = speech.voice_args(VoiceProfile::Female);
        assert_eq!(args, vec!["-s", "158", "-p", "60"]);
    }

    #[test]
    fn test_unknown_command_gets_no_args() {
        let speech = backend("festival");
        assert!(speech.voice_args(VoiceProfile::Default).is_empty());
    }

    #[test]
    fn test_missing_command_is_an_error() {
        let mut speech = backend("definitely-not-a-speech-command");
        let result = speech.speak("hello", VoiceProfile::Default);
        assert!(matches!(result, Err(StoaError::Narration(_))));
        assert!(!speech.is_speaking());
    }

    #[test]
    fn test_stop_without_narration() {
        let mut speech = backend("say");
        speech.stop();
        assert!(!speech.is_speaking());
        assert!(speech.wait().is_ok());
    }
}
