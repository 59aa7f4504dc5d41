//! Error types for stoa.

use thiserror::Error;

/// Errors that can occur in stoa.
#[derive(Error, Debug)]
pub enum StoaError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration problem (missing home, unreadable file, bad value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Ambient audio playback failed.
    #[error("Audio error: {0}")]
    Audio(String),

    /// Speech synthesis failed.
    #[error("Narration error: {0}")]
    Narration(String),

    /// Terminal setup or event handling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoaError::NotFound("article 42".to_string());
        assert_eq!(err.to_string(), "Not found: article 42");

        let err = StoaError::Database("locked".to_string());
        assert_eq!(err.to_string(), "Database error: locked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: StoaError = io.into();
        assert!(matches!(err, StoaError::Io(_)));
    }
}
