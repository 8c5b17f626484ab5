//! Backend call failures.
//!
//! DESIGN
//! ======
//! Every domain service and the auth gateway return `ApiError`. The variants
//! follow what a view needs to decide: an actionable connectivity message, a
//! redirect to login, an inline validation message, an empty state, or a
//! generic failure. Transport-level classification happens in `http`; this
//! module only owns the taxonomy and the text helpers.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, CORS, reset).
    #[error("cannot reach backend at {base_url}: {message}")]
    BackendUnreachable { base_url: String, message: String },

    /// The request exceeded the configured timeout.
    #[error("backend at {base_url} did not respond within {secs}s")]
    Timeout { base_url: String, secs: u64 },

    /// 401: the session token is missing, expired or invalid.
    #[error("unauthorized: {detail}")]
    Unauthorized { detail: String },

    /// Any other 4xx carrying a detail meant for the form.
    #[error("request rejected ({status}): {detail}")]
    Validation { status: u16, detail: String },

    /// 404.
    #[error("not found: {detail}")]
    NotFound { detail: String },

    /// 5xx or any other non-success status.
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// The request could not be built on the client side.
    #[error("failed to build request: {0}")]
    Request(String),

    /// A success body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Client-side validation refused the call before any network IO.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Classify a non-success HTTP status with its raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| format!("HTTP {status}"));
        match status {
            401 => Self::Unauthorized { detail },
            404 => Self::NotFound { detail },
            400..=499 => Self::Validation { status, detail },
            _ => Self::Server { status, detail },
        }
    }

    /// Text for display: server-provided detail when present, otherwise
    /// `fallback`. Connectivity failures always get the actionable message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::BackendUnreachable { base_url, .. } => {
                format!("Cannot connect to the server at {base_url}. Make sure the backend is running.")
            }
            Self::Timeout { base_url, .. } => {
                format!("The server at {base_url} took too long to respond. Please try again.")
            }
            Self::Unauthorized { .. } => "Your session has ended. Please log in again.".to_owned(),
            Self::Validation { detail, .. } | Self::NotFound { detail } | Self::Server { detail, .. } => {
                if detail.starts_with("HTTP ") {
                    fallback.to_owned()
                } else {
                    detail.clone()
                }
            }
            Self::Rejected(message) => message.clone(),
            Self::Request(_) | Self::Decode(_) => fallback.to_owned(),
        }
    }

    /// No response was received at all (unreachable or timed out).
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::BackendUnreachable { .. } | Self::Timeout { .. })
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"detail": "..."}`, validation lists shaped
/// `{"detail": [{"msg": "..."}, ...]}`, `{"message": "..."}` and short
/// plain-text bodies.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return (trimmed.len() <= 200 && !trimmed.starts_with('<')).then(|| trimmed.to_owned());
    };
    match value.get("detail") {
        Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
        Some(Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !msgs.is_empty() {
                return Some(msgs.join("; "));
            }
        }
        _ => {}
    }
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
