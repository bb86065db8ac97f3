//! Session context: where the latest auth token lives.
//!
//! ARCHITECTURE
//! ============
//! The token is not ambient global state. A `Session` is built once by the
//! front-end and handed to whatever performs authenticated requests
//! (`AuthClient`). The backing `TokenStore` decides persistence: in-memory
//! for tests, a JSON file for the CLI, `localStorage` in the browser.
//!
//! Writes are last-writer-wins; the store is never cleared by this crate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "token";

/// Errors produced by token store backends.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token store io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend is not reachable (e.g. no `window.localStorage`).
    #[error("token store unavailable: {0}")]
    Unavailable(String),
}

/// String key-value persistence for session data.
pub trait TokenStore: Send + Sync {
    /// Read the value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
}

// =============================================================================
// SESSION
// =============================================================================

/// Cheaply clonable handle to the token store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    #[must_use]
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by a fresh [`MemoryTokenStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Store `token` under [`TOKEN_KEY`].
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`SessionError`].
    pub fn persist_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.set(TOKEN_KEY, token)
    }

    /// The most recently persisted token.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`SessionError`].
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.store.get(TOKEN_KEY)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

// =============================================================================
// BACKENDS
// =============================================================================

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// JSON object file of string entries, e.g. `{"token":"..."}`.
///
/// A missing file reads as empty. Each write rewrites the whole file; an
/// unparseable file is replaced rather than failing the write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = match self.load() {
            Err(SessionError::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "token file is corrupt; rewriting it");
                BTreeMap::new()
            }
            other => other?,
        };
        entries.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
