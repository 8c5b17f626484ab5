//! Auth gateway: login, identity lookup, token verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/auth/me` is the single source of truth for the caller's role. Nothing
//! about the user is cached; the guard re-asks on every evaluation.
//!
//! DESIGN
//! ======
//! Identity lookup is fail-closed: any failure clears the stored token before
//! the error is returned, so a half-valid session never lingers.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{LoginResponse, Role, User};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend answered and refused the credentials.
    #[error("invalid credentials: {detail}")]
    InvalidCredentials { detail: String },

    /// No response (unreachable or timed out).
    #[error(transparent)]
    BackendUnreachable(ApiError),

    /// No token stored; nothing to verify.
    #[error("no active session")]
    NoSession,

    #[error(transparent)]
    Api(ApiError),
}

impl AuthError {
    /// Message for the login form or a session-ended notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { detail } => detail.clone(),
            Self::BackendUnreachable(e) | Self::Api(e) => e.user_message("Login failed. Please try again."),
            Self::NoSession => "Please log in to continue.".to_owned(),
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        if err.is_unreachable() {
            Self::BackendUnreachable(err)
        } else {
            Self::Api(err)
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthGateway {
    api: ApiClient,
}

impl AuthGateway {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Exchange credentials for a token. Does not persist the token.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for any 4xx answer,
    /// [`AuthError::BackendUnreachable`] when no answer arrived.
    pub async fn login(&self, username: &str, password: &str, user_type: Role) -> Result<LoginResponse, AuthError> {
        let result = self
            .api
            .post("/auth/login")
            .anonymous()
            .form(&[("username", username), ("password", password), ("user_type", user_type.as_str())])
            .fetch::<LoginResponse>()
            .await;

        match result {
            Ok(login) => {
                tracing::info!(role = %login.role, "login succeeded");
                Ok(login)
            }
            Err(ApiError::Unauthorized { detail } | ApiError::Validation { detail, .. } | ApiError::NotFound { detail }) => {
                tracing::info!("login rejected");
                Err(AuthError::InvalidCredentials { detail })
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                Err(e.into())
            }
        }
    }

    /// Log in and persist the returned token in the shared session.
    ///
    /// # Errors
    ///
    /// See [`AuthGateway::login`].
    pub async fn sign_in(&self, username: &str, password: &str, user_type: Role) -> Result<LoginResponse, AuthError> {
        let login = self.login(username, password, user_type).await?;
        self.api.session().set_token(&login.access_token);
        Ok(login)
    }

    /// Resolve the identity behind the stored token. Clears the token on any
    /// failure.
    ///
    /// # Errors
    ///
    /// [`AuthError::NoSession`] without a network call when no token is
    /// stored; otherwise the classified request failure.
    pub async fn current_user(&self) -> Result<User, AuthError> {
        let session = self.api.session();
        if !session.is_authenticated() {
            session.remove_token();
            return Err(AuthError::NoSession);
        }

        match self.api.get("/auth/me").fetch::<User>().await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::info!(error = %e, "identity lookup failed; clearing session");
                session.remove_token();
                Err(e.into())
            }
        }
    }

    /// `true` iff [`AuthGateway::current_user`] succeeds. Never fails.
    pub async fn verify_token(&self) -> bool {
        self.current_user().await.is_ok()
    }

    /// Clear the stored token.
    pub fn logout(&self) {
        tracing::info!("logging out");
        self.api.session().remove_token();
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
