//! Attendance portal client core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Student and teacher front-ends for an attendance backend. Every page
//! authenticates with a bearer token, calls one or more REST endpoints, and
//! renders what comes back. This crate holds everything those front-ends
//! share; the terminal (`cli/`) and browser (`client/`) crates add only
//! presentation, a transport and a token store.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! view -> RouteGuard -> AuthGateway -> services::* -> ApiClient -> Transport
//!                                   \-> SessionStore <-/
//! ```
//!
//! - `session`: process-wide token holder, injected as a trait object.
//! - `http`: request builder, bearer attachment, failure classification.
//! - `auth`: login, identity lookup, token verification.
//! - `guard` / `routes`: per-activation role check and redirect decision.
//! - `services`: one thin function per backend operation.
//! - `pipeline`: explicit ordering for dependent call chains.
//! - `views`: display-side derivations (badges, rows, filters, ranges).

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod pipeline;
pub mod routes;
pub mod services;
pub mod session;
pub mod types;
pub mod views;

#[cfg(test)]
mod test_support;

pub use auth::{AuthError, AuthGateway};
pub use config::{ConfigError, PortalConfig};
pub use error::ApiError;
pub use guard::{GuardState, Redirect, RouteGuard};
pub use http::ApiClient;
pub use routes::AppRoute;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SharedSession};
pub use types::{Role, User};
