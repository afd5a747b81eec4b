//! Saved session state.
//!
//! Holds the one piece of UI state that survives a restart: whether the
//! onboarding screen still has to be shown.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize session: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    #[serde(default = "default_show_onboarding")]
    pub show_onboarding: bool,
}

fn default_show_onboarding() -> bool {
    true
}

impl Default for SavedSession {
    fn default() -> Self {
        Self {
            show_onboarding: default_show_onboarding(),
        }
    }
}

/// Session file on disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `greeter/session.toml` under `dirs::data_local_dir()`, falling back
    /// to the current directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("greeter").join("session.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved session. A missing file is a fresh session.
    pub fn load(&self) -> Result<SavedSession, SessionError> {
        if !self.path.exists() {
            return Ok(SavedSession::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SessionError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| SessionError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Like [`SessionStore::load`], but an unreadable file means a fresh session.
    pub fn load_or_default(&self) -> SavedSession {
        match self.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring saved session");
                SavedSession::default()
            }
        }
    }

    /// Write the session, replacing the previous file in one rename.
    pub fn save(&self, session: &SavedSession) -> Result<(), SessionError> {
        let content = toml::to_string(session)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, content).map_err(|e| SessionError::WriteError {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Forget the saved session.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
