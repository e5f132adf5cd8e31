//! Durable storage for the session slot.
//!
//! The slot holds at most one serialized session. Absence means "no session";
//! anything unreadable is reported as an error and downgraded to "no session"
//! by the store, never surfaced to the user.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use incidentlog_core::Identity;

/// What the slot holds: the identity plus when it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub identity: Identity,
    pub saved_at: DateTime<Utc>,
}

impl PersistedSession {
    pub fn now(identity: Identity) -> Self {
        Self {
            identity,
            saved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session slot unreadable")]
    Io(#[source] std::io::Error),

    #[error("session slot malformed")]
    Malformed(#[source] serde_json::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// A durable slot holding at most one session.
///
/// There is a single writer by construction (the UI is event-driven), so
/// implementations only need interior mutability where their medium does.
pub trait SessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;
    fn save(&self, session: &PersistedSession) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed slot
// ─────────────────────────────────────────────────────────────────────────────

/// JSON file slot under the OS app-data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the slot at its default location:
    /// `{app_data_dir}/incidentlog/session.json`.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(default_session_path()?))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err)),
        };

        let session = serde_json::from_str(&raw).map_err(StorageError::Malformed)?;
        Ok(Some(session))
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }

        let payload = serde_json::to_string(session).map_err(StorageError::Malformed)?;
        fs::write(&self.path, payload).map_err(StorageError::Io)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

/// Resolve the default session slot path:
/// `{app_data_dir}/incidentlog/session.json`.
fn default_session_path() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut home| {
                home.push(".local");
                home.push("share");
                home
            })
        })
        .ok_or(StorageError::NoDataDir)?;

    let mut path = base;
    path.push("incidentlog");
    path.push("session.json");
    Ok(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory slot (tests, ephemeral sessions)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory slot. Clones share the same underlying cell, so a "restarted"
/// store can be pointed at the same slot in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<PersistedSession>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
