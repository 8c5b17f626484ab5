//! `fetch`-backed transport for the core HTTP client.
//!
//! Client-side (csr): real requests via `gloo-net`, raced against a
//! `gloo-timers` sleep and cancelled through an `AbortController` when the
//! timer wins.
//! Native builds (tests, tooling): every request fails with `NoResponse` so
//! callers take their offline path instead of panicking.
//!
//! TRADE-OFFS
//! ==========
//! Browser `fetch` cannot distinguish connection refused from a CORS block or
//! a DNS failure; all of them surface as one `NoResponse` message and the core
//! reports them as "backend unreachable".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use portal::http::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_with_timeout(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::NoResponse(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "browser transport is only available in the csr build";

/// Map a failed `fetch` to the transport taxonomy. An abort caused by our own
/// timer is a timeout, not a lost connection.
#[cfg(any(test, feature = "csr"))]
fn classify_fetch_error(message: String, timed_out: bool, timeout: std::time::Duration) -> TransportError {
    if timed_out {
        TransportError::Timeout(timeout)
    } else {
        TransportError::NoResponse(message)
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "csr")]
async fn send_with_timeout(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use futures::future::{Either, select};

    let timeout = request.timeout;
    let controller = web_sys::AbortController::new().map_err(|e| TransportError::Build(format!("{e:?}")))?;
    let signal = controller.signal();

    let fetch = Box::pin(fetch_once(request, &signal));
    let timer = Box::pin(gloo_timers::future::sleep(timeout));
    match select(fetch, timer).await {
        Either::Left((result, _)) => result.map_err(|message| classify_fetch_error(message, false, timeout)),
        Either::Right(((), _)) => {
            controller.abort();
            log::warn!("request aborted after {}s", timeout.as_secs());
            Err(classify_fetch_error(String::new(), true, timeout))
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch_once(request: HttpRequest, signal: &web_sys::AbortSignal) -> Result<HttpResponse, String> {
    use gloo_net::http::Request;
    use portal::http::{Body, Method};

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    if !request.query.is_empty() {
        builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder = builder.abort_signal(Some(signal));

    let prepared = match request.body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Form(fields) => builder.body(form_params(&fields)?),
        Body::Multipart(parts) => builder.body(form_data(&parts)?),
    }
    .map_err(|e| e.to_string())?;

    let response = prepared.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_params(fields: &[(String, String)]) -> Result<web_sys::UrlSearchParams, String> {
    let params = web_sys::UrlSearchParams::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params)
}

#[cfg(feature = "csr")]
fn form_data(parts: &[portal::http::Part]) -> Result<web_sys::FormData, String> {
    use portal::http::Part;

    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for part in parts {
        match part {
            Part::Text { name, value } => form.append_with_str(name, value),
            Part::File { name, file } => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let sequence = js_sys::Array::of1(&bytes);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&file.content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                    .map_err(|e| format!("{e:?}"))?;
                form.append_with_blob_and_filename(name, &blob, &file.file_name)
            }
        }
        .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}
