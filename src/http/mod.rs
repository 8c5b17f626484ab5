//! HTTP wrapper: request building, bearer attachment, failure classification.

pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod reqwest_transport;
pub mod transport;

pub use client::{ApiClient, ApiRequest};
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{Body, FilePart, HttpRequest, HttpResponse, Method, Part, Transport, TransportError};
