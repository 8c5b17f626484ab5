//! Route guard for role-gated views.
//!
//! DESIGN
//! ======
//! A guard is a small state machine created per route activation:
//!
//! ```text
//! Loading --evaluate--> Authorized(user)
//!         \-----------> Denied(reason)
//! ```
//!
//! Both outcomes are terminal; a fresh activation builds a fresh guard.
//! Evaluation order:
//!
//! 1. no stored token -> denied, no network call
//! 2. token verification fails -> denied (gateway already cleared the token)
//! 3. identity lookup fails -> denied
//! 4. role equals the required role -> authorized, else denied
//!
//! Every denial is the same outcome for the caller: redirect to login with
//! history replaced. The reason exists for logging only.

use crate::auth::AuthGateway;
use crate::routes::{AppRoute, LOGIN_PATH};
use crate::types::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    MissingToken,
    InvalidSession,
    IdentityUnavailable,
    RoleMismatch { required: Role, actual: Role },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authorized(User),
    Denied(DenyReason),
}

impl GuardState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authorized(user) => Some(user),
            _ => None,
        }
    }
}

/// Navigation instruction issued on denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// Replace the current history entry rather than pushing.
    pub replace: bool,
}

impl Redirect {
    #[must_use]
    pub fn to_login() -> Self {
        Self { to: LOGIN_PATH, replace: true }
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    required: Role,
    state: GuardState,
}

impl RouteGuard {
    #[must_use]
    pub fn new(required: Role) -> Self {
        Self { required, state: GuardState::Loading }
    }

    /// Guard for `route`, or `None` when the route is public.
    #[must_use]
    pub fn for_route(route: &AppRoute) -> Option<Self> {
        route.required_role().map(Self::new)
    }

    #[must_use]
    pub fn required(&self) -> Role {
        self.required
    }

    #[must_use]
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Resolve the guard. Runs at most once; later calls return the settled
    /// state without touching the network.
    pub async fn evaluate(&mut self, gateway: &AuthGateway) -> &GuardState {
        if self.state.is_loading() {
            self.state = authorize(gateway, self.required).await;
        }
        &self.state
    }

    /// Where to go once settled; `None` while loading or when authorized.
    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        match self.state {
            GuardState::Denied(_) => Some(Redirect::to_login()),
            GuardState::Loading | GuardState::Authorized(_) => None,
        }
    }
}

/// One-shot evaluation for callers that own no guard value (reactive
/// resources that need a `'static` future).
pub async fn authorize(gateway: &AuthGateway, required: Role) -> GuardState {
    let state = evaluate_once(gateway, required).await;
    match &state {
        GuardState::Authorized(user) => {
            tracing::debug!(role = %user.role, "route authorized");
        }
        GuardState::Denied(reason) => {
            tracing::info!(required = %required, ?reason, "route denied");
        }
        GuardState::Loading => {}
    }
    state
}

async fn evaluate_once(gateway: &AuthGateway, required: Role) -> GuardState {
    if !gateway.api().session().is_authenticated() {
        return GuardState::Denied(DenyReason::MissingToken);
    }
    if !gateway.verify_token().await {
        return GuardState::Denied(DenyReason::InvalidSession);
    }
    let Ok(user) = gateway.current_user().await else {
        return GuardState::Denied(DenyReason::IdentityUnavailable);
    };
    if user.role == required {
        GuardState::Authorized(user)
    } else {
        GuardState::Denied(DenyReason::RoleMismatch { required, actual: user.role })
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
