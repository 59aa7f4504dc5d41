//! Path resolution for stoa configuration and data files.
//!
//! All stoa data is stored in `~/.stoa/`:
//! - `config.yaml` - Main configuration file
//! - `stoa.db` - SQLite database for articles and the practice log
//! - `audio/` - Ambient sound files (rain.mp3, ocean.mp3, ...)

use std::path::PathBuf;

use crate::error::StoaError;

/// Paths to stoa configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.stoa/`
    pub root: PathBuf,
    /// Config file: `~/.stoa/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.stoa/stoa.db`
    pub database: PathBuf,
    /// Ambient audio directory: `~/.stoa/audio/`
    pub audio: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StoaError> {
        let home = std::env::var("HOME")
            .map_err(|_| StoaError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".stoa")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("stoa.db"),
            audio: root.join("audio"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StoaError> {
        for dir in [&self.root, &self.audio] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    StoaError::Config(format!("Failed to create directory {:?}: {}", dir, e))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".stoa"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-stoa");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("stoa.db"));
        assert_eq!(paths.audio, root.join("audio"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.audio.exists());
    }
}
