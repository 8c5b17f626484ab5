//! Typed backend operations, one module per resource.
//!
//! Each function marshals its parameters (query string, multipart form, path
//! segment), issues exactly one call through `ApiClient`, and returns the
//! decoded body. Failures come back unchanged from the HTTP layer; nothing
//! here retries or suppresses errors. Parameter names match the backend's.

pub mod appeals;
pub mod assistant;
pub mod attendance;
pub mod lectures;
pub mod submissions;
pub mod teacher;
