//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns such as file pickers, confirm
//! prompts and router options out of page and component logic.

pub mod dialog;
pub mod file;
pub mod nav;
