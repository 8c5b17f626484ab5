//! Configured request-sending facility shared by every domain service.
//!
//! DESIGN
//! ======
//! One `ApiClient` per front-end, cloned freely. It owns the base address and
//! per-request timeout, attaches the bearer token from the shared session,
//! and classifies every outcome into `ApiError`:
//!
//! - transport timeout -> `Timeout`
//! - no response -> `BackendUnreachable`
//! - construction failure -> `Request`
//! - non-2xx -> `ApiError::from_status`
//!
//! A 401 on an authenticated request clears the stored token before the
//! error reaches the caller, so a guard evaluated afterwards sees no session.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{Body, HttpRequest, HttpResponse, Method, Part, Transport, TransportError};
use crate::config::PortalConfig;
use crate::error::ApiError;
use crate::session::SharedSession;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    transport: Arc<dyn Transport>,
    session: SharedSession,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &PortalConfig, transport: Arc<dyn Transport>, session: SharedSession) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.request_timeout,
            transport,
            session,
        }
    }

    /// Client over the native reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the HTTP client cannot be built.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_reqwest(config: &PortalConfig, session: SharedSession) -> Result<Self, TransportError> {
        let transport = super::reqwest_transport::ReqwestTransport::new(config)?;
        Ok(Self::new(config, Arc::new(transport), session))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    #[must_use]
    pub fn get(&self, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, Method::Get, path)
    }

    #[must_use]
    pub fn post(&self, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, Method::Post, path)
    }

    fn map_transport_error(&self, err: TransportError) -> ApiError {
        match err {
            TransportError::Timeout(after) => ApiError::Timeout {
                base_url: self.base_url.clone(),
                secs: after.as_secs(),
            },
            TransportError::NoResponse(message) => ApiError::BackendUnreachable {
                base_url: self.base_url.clone(),
                message,
            },
            TransportError::Build(message) => ApiError::Request(message),
        }
    }
}

// =============================================================================
// REQUEST BUILDER
// =============================================================================

#[must_use = "requests do nothing until sent"]
pub struct ApiRequest<'a> {
    client: &'a ApiClient,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Body,
    anonymous: bool,
}

impl<'a> ApiRequest<'a> {
    fn new(client: &'a ApiClient, method: Method, path: &str) -> Self {
        Self {
            client,
            method,
            path: path.to_owned(),
            query: Vec::new(),
            body: Body::Empty,
            anonymous: false,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Adds the parameter only when `value` is present.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = Body::Form(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        );
        self
    }

    pub fn json(mut self, value: Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    pub fn multipart(mut self, parts: Vec<Part>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    /// Send without a bearer header. A 401 then means bad credentials, not
    /// an ended session, so the stored token is left alone.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    fn build(self) -> (HttpRequest, &'a ApiClient, bool) {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if !self.anonymous {
            if let Some(token) = self.client.session.get_token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }
        let request = HttpRequest {
            method: self.method,
            url: format!("{}{}", self.client.base_url, self.path),
            query: self.query,
            headers,
            body: self.body,
            timeout: self.client.timeout,
        };
        (request, self.client, self.anonymous)
    }

    /// Send and return the raw success response.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for transport failures and
    /// non-2xx statuses.
    pub async fn send(self) -> Result<HttpResponse, ApiError> {
        let path = self.path.clone();
        let (request, client, anonymous) = self.build();
        let method = request.method.as_str();
        tracing::debug!(method, path = %path, "sending request");

        let response = match client.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method, path = %path, error = %e, "request failed without response");
                return Err(client.map_transport_error(e));
            }
        };

        if response.is_success() {
            tracing::debug!(method, path = %path, status = response.status, "request succeeded");
            return Ok(response);
        }

        let err = ApiError::from_status(response.status, &response.body);
        if err.is_unauthorized() && !anonymous {
            tracing::info!(method, path = %path, "backend rejected session; clearing token");
            client.session.remove_token();
        } else {
            tracing::debug!(method, path = %path, status = response.status, "request rejected");
        }
        Err(err)
    }

    /// Send and decode the JSON body.
    ///
    /// # Errors
    ///
    /// As [`ApiRequest::send`], plus [`ApiError::Decode`] when the body does
    /// not match `T`.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.send().await?;
        decode(&response.body)
    }
}

/// Decode a success body; an empty body decodes as JSON `null`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] on malformed or mismatched JSON.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
