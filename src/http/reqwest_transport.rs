//! Native transport over reqwest.

use std::time::Duration;

use super::transport::{Body, HttpRequest, HttpResponse, Method, Part, Transport, TransportError};
use crate::config::PortalConfig;

// =============================================================================
// CLIENT
// =============================================================================

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client with the configured connect timeout. The per-request
    /// timeout travels on each `HttpRequest`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the TLS backend fails to
    /// initialize.
    pub fn new(config: &PortalConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout;
        let builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };
        let mut builder = builder.timeout(timeout).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Form(fields) => builder.form(&fields),
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder.send().await.map_err(|e| classify(&e, timeout))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(&e, timeout))?;
        Ok(HttpResponse { status, body })
    }
}

fn multipart_form(parts: Vec<Part>) -> Result<reqwest::multipart::Form, TransportError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File { name, file } => {
                let body = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|e| TransportError::Build(e.to_string()))?;
                form.part(name, body)
            }
        };
    }
    Ok(form)
}

fn classify(err: &reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else if err.is_builder() {
        TransportError::Build(err.to_string())
    } else {
        TransportError::NoResponse(err.to_string())
    }
}
