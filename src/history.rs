//! Persistent, append-only session history.
//!
//! The history is an ordered list of flat [`SessionResult`] records,
//! most-recent-first, persisted as a JSON array. Corrupt records are a
//! storage concern and are handled here: an entry that fails to
//! deserialize is skipped on load, and a file whose top-level structure is
//! unreadable yields an empty history rather than an error. The staircase
//! core never sees either case.

use std::fs;
use std::io;
use std::path::Path;

use crate::types::SessionResult;

/// Error returned when reading or writing the history file.
#[derive(Debug)]
pub enum HistoryError {
    /// Underlying file IO failed (other than the file not existing).
    Io(io::Error),
    /// Serializing the history to JSON failed.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "history file IO failed: {err}"),
            Self::Serialize(err) => write!(f, "history serialization failed: {err}"),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for HistoryError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Append-only, most-recent-first list of completed sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    sessions: Vec<SessionResult>,
}

impl SessionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a history from a JSON file.
    ///
    /// A missing file yields an empty history (first launch). Records that
    /// fail to deserialize are skipped; if the file does not hold a JSON
    /// array at all, the whole history is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` only for IO failures other than the file
    /// not existing.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(err.into()),
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(_) => return Ok(Self::new()),
        };

        let sessions = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        Ok(Self { sessions })
    }

    /// Write the history to a JSON file, replacing any previous content.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&self.sessions).map_err(HistoryError::Serialize)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Prepend a newly completed session.
    pub fn append(&mut self, result: SessionResult) {
        self.sessions.insert(0, result);
    }

    /// All sessions, most recent first.
    pub fn sessions(&self) -> &[SessionResult] {
        &self.sessions
    }

    /// The most recently completed session, if any.
    pub fn latest(&self) -> Option<&SessionResult> {
        self.sessions.first()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the history holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
