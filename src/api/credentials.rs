//! API session credentials.
//!
//! The bearer token and username returned by login are stored in
//! `~/.pomo/session.json` with restricted permissions (0600). The token is
//! opaque; there is no expiry or refresh logic. Logout deletes the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;

/// A logged-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Opaque bearer token forwarded on every authenticated request.
    pub token: String,
    /// Username the token belongs to.
    pub username: String,
}

/// Reads and writes the session file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, PomoError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Ok(Self::at_path(paths.session_file))
    }

    /// Create a store backed by a specific file (useful for testing).
    #[must_use]
    pub const fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Credentials>, PomoError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            PomoError::Storage(format!(
                "Failed to read session file {}: {e}",
                self.path.display()
            ))
        })?;

        let credentials = serde_json::from_str(&contents)?;
        Ok(Some(credentials))
    }

    /// Persist a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, credentials: &Credentials) -> Result<(), PomoError> {
        let contents = serde_json::to_string_pretty(credentials)?;

        // Restrict permissions: the file holds a live token
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .map_err(|e| {
                    PomoError::Storage(format!(
                        "Failed to open session file {}: {e}",
                        self.path.display()
                    ))
                })?;
            file.write_all(contents.as_bytes()).map_err(|e| {
                PomoError::Storage(format!(
                    "Failed to write session file {}: {e}",
                    self.path.display()
                ))
            })?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, contents).map_err(|e| {
                PomoError::Storage(format!(
                    "Failed to write session file {}: {e}",
                    self.path.display()
                ))
            })?;
        }

        Ok(())
    }

    /// Remove the stored session entirely. A missing file is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), PomoError> {
        if !self.path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&self.path).map_err(|e| {
            PomoError::Storage(format!(
                "Failed to remove session file {}: {e}",
                self.path.display()
            ))
        })
    }
}
