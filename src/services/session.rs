//! Session store — the persisted admin login state.
//!
//! ARCHITECTURE
//! ============
//! The dashboard holds exactly one admin session at a time: the opaque API
//! token plus the admin profile returned at login. Both live in a single
//! serialized record so a half-written pair can never be observed, and the
//! record survives process restarts. Exactly two call sites mutate it (the
//! login handler and the logout handler); everything else reads.
//!
//! TRADE-OFFS
//! ==========
//! Reads never fail: a missing or unparseable record reads as "no session",
//! so a corrupt file can only log the admin out, never break navigation.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// The persisted login state: opaque API token plus admin profile record.
/// The token's structure is never inspected, only stored and forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub profile: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("session storage failed: {0}")]
    Io(#[from] io::Error),
}

/// Storage backend for the single session record.
///
/// `load` is infallible: it is consulted on every navigation decision, so
/// corrupt or missing state degrades to `None` instead of erroring.
pub trait SessionBackend: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn store(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// File-backed session record. Writes land in a sibling temp file first and
/// are renamed into place, so the record on disk is always whole.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "unreadable session record, treating as logged out"
                );
                None
            }
        }
    }

    fn store(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(session)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory backend, substituted for the file in tests.
#[derive(Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<Session>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Session>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<Session> {
        self.slot().clone()
    }

    fn store(&self, session: &Session) -> Result<(), SessionError> {
        *self.slot() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot() = None;
        Ok(())
    }
}

/// Handle to the session store, cloned into application state.
#[derive(Clone)]
pub struct SessionManager {
    backend: Arc<dyn SessionBackend>,
}

impl SessionManager {
    #[must_use]
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Store a freshly authenticated session, replacing any prior one.
    /// The token is opaque; no format checks happen here.
    pub fn set_session(&self, token: String, profile: serde_json::Value) -> Result<(), SessionError> {
        self.backend.store(&Session { token, profile })
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.backend.load()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.load().map(|s| s.token)
    }

    #[must_use]
    pub fn profile(&self) -> Option<serde_json::Value> {
        self.backend.load().map(|s| s.profile)
    }

    /// Drop the session. Safe to call when nothing is stored.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.backend.clear()
    }

    /// Optimistic client-side check: true iff a token and a profile are both
    /// present and non-empty. The token is not re-verified with the API; a
    /// revoked token surfaces as a 401 on the next authenticated call.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.backend
            .load()
            .is_some_and(|s| !s.token.is_empty() && !s.profile.is_null())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
