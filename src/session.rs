//! Session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only shared mutable state in the portal. It is
//! written by a successful login and cleared by logout or by any request the
//! backend rejects as unauthorized. Every outgoing request reads it.
//!
//! DESIGN
//! ======
//! Storage is an injectable trait object rather than an ambient global so the
//! HTTP layer, the auth gateway and the route guard all share one handle and
//! tests can swap in memory storage. The browser crate provides a
//! `localStorage` implementation; the CLI persists to a file.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

/// Process-wide holder of the bearer token.
///
/// Implementations never validate the token; validity is only known by
/// asking the backend.
pub trait SessionStore: Send + Sync {
    /// Current token, or `None` when unauthenticated.
    fn get_token(&self) -> Option<String>;

    /// Store `token`, overwriting any prior value.
    fn set_token(&self, token: &str);

    /// Clear the token. Idempotent.
    fn remove_token(&self);

    /// `true` iff a token is present. Says nothing about validity.
    fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}

/// Shared handle passed to the HTTP client and the guard.
pub type SharedSession = Arc<dyn SessionStore>;

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-memory store; lives as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        non_empty(guard.clone())
    }

    fn set_token(&self, token: &str) {
        let mut guard = self.token.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(token.to_owned());
    }

    fn remove_token(&self) {
        let mut guard = self.token.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
    }
}

// =============================================================================
// FILE
// =============================================================================

/// File-backed store; the token survives process restarts.
///
/// Reads come from a cache loaded at open time. Writes go through to disk.
/// IO failures are logged and leave the cache authoritative for the rest of
/// the process.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: Mutex<Option<String>>,
}

impl FileSessionStore {
    /// Open (or lazily create) the token file at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = match std::fs::read_to_string(&path) {
            Ok(raw) => non_empty(Some(raw.trim().to_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read session file");
                None
            }
        };
        Self { path, cached: Mutex::new(cached) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(path = %parent.display(), error = %e, "failed to create session directory");
                    return;
                }
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session token");
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get_token(&self) -> Option<String> {
        let guard = self.cached.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.clone()
    }

    fn set_token(&self, token: &str) {
        let mut guard = self.cached.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = non_empty(Some(token.to_owned()));
        self.write_file(token);
    }

    fn remove_token(&self) {
        let mut guard = self.cached.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file"),
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
