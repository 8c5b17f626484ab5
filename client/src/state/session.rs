//! `localStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads under the `Token` key, matching the CLI's token
//! file name. Storage access failures (private mode, quota) are treated as
//! "no token" so the guard falls back to the login page.
//!
//! TRADE-OFFS
//! ==========
//! Native builds have no `window`; they keep the token in memory so page
//! logic stays testable off the browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use portal::SessionStore;
#[cfg(not(feature = "csr"))]
use portal::MemorySessionStore;
#[cfg(feature = "csr")]
use portal::config::TOKEN_STORAGE_KEY;

#[derive(Debug, Default)]
pub struct LocalStorageSessionStore {
    #[cfg(not(feature = "csr"))]
    fallback: MemorySessionStore,
}

impl LocalStorageSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStorageSessionStore {
    fn get_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.trim().is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            self.fallback.get_token()
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    log::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            self.fallback.set_token(token);
        }
    }

    fn remove_token(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            self.fallback.remove_token();
        }
    }
}
