//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, actions, notices) and
//! delegates shared rendering to `components`. Derivations live in the
//! `portal` crate so the CLI renders the same data the same way.

pub mod appeal;
pub mod attendance;
pub mod login;
pub mod not_found;
pub mod student;
pub mod submissions;
pub mod teacher;
pub mod teacher_appeals;
pub mod teacher_attendance;
pub mod teacher_classes;
pub mod teacher_report;
