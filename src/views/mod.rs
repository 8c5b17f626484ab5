//! Display-side derivations shared by every front-end.
//!
//! Nothing here talks to the backend. These helpers turn decoded payloads
//! into what a page shows: badge classes, labels, filtered rows, and the
//! load state that decides between content, placeholder and error.

pub mod dates;
pub mod format;
pub mod status;
pub mod student;
pub mod teacher;

use crate::error::ApiError;

/// What a data-backed section renders. There is no partial state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// 404 from the backend; shown as an empty state.
    NotFound,
    /// 401 from the backend; the token is gone and the page must leave.
    SessionEnded,
    /// Any other failure, already translated to display text.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Settle a finished call. `fallback` is shown when the server gave no
    /// usable detail.
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) if e.is_not_found() => Self::NotFound,
            Err(e) if e.is_unauthorized() => Self::SessionEnded,
            Err(e) => Self::Failed(e.user_message(fallback)),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
