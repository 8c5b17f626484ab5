//! Networking adapters for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` plugs `gloo-net` into the core's `Transport` seam. Endpoint
//! knowledge stays in `portal::services`; nothing here knows a URL path.

pub mod transport;
