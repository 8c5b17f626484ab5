//! Application state shared through Leptos context.

pub mod context;
pub mod session;
