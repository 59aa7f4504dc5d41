//! Spoken narration of articles.
//!
//! The contract is deliberately small: speak this text, stop on demand,
//! report completion or failure. Synthesis goes through the system
//! speech command so the crate carries no audio stack of its own.

mod speech;
mod voice;

pub use speech::SpeechCommand;
pub use voice::VoiceProfile;

use crate::error::StoaError;

/// Something that can speak text aloud.
#[cfg_attr(test, mockall::automock)]
pub trait Narrator {
    /// Start speaking, replacing any narration in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the speech backend cannot be started.
    fn speak(&mut self, text: &str, voice: VoiceProfile) -> Result<(), StoaError>;

    /// Stop narration. No effect if nothing is being spoken.
    fn stop(&mut self);

    /// Whether narration is still in progress.
    fn is_speaking(&mut self) -> bool;

    /// Block until the current narration finishes or fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend exited unsuccessfully.
    fn wait(&mut self) -> Result<(), StoaError>;
}
