//! Reusable UI components shared across pages.
//!
//! ARCHITECTURE
//! ============
//! `protected_route` gates pages by role, `load` turns service calls into
//! rendered sections, and the rest are page furniture.

pub mod chatbot;
pub mod date_range;
pub mod load;
pub mod protected_route;
pub mod top_bar;
