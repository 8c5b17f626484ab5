//! Teacher schedule, classes and lecture control.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{Ack, ClassList, TeacherSchedule};

/// Lifecycle action for a lecture instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LectureAction {
    /// Open the lecture for submissions, announcing today's concept.
    Start { concept: Option<String> },
    /// Close the lecture.
    Close,
}

impl LectureAction {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start { .. } => "START",
            Self::Close => "CLOSE",
        }
    }

    fn concept(&self) -> Option<&str> {
        match self {
            Self::Start { concept } => concept.as_deref().map(str::trim).filter(|c| !c.is_empty()),
            Self::Close => None,
        }
    }
}

/// `GET /teacher/lectures/today?teacher_id`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn teacher_schedule(api: &ApiClient, teacher_id: &str) -> Result<TeacherSchedule, ApiError> {
    api.get("/teacher/lectures/today").query("teacher_id", teacher_id).fetch().await
}

/// `GET /teacher/classes?teacher_id`, rosters included.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn teacher_classes(api: &ApiClient, teacher_id: &str) -> Result<ClassList, ApiError> {
    api.get("/teacher/classes").query("teacher_id", teacher_id).fetch().await
}

/// `POST /teacher/lecture/lock?lecture_instance_id,locked`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn toggle_lecture_lock(api: &ApiClient, lecture_instance_id: &str, locked: bool) -> Result<Ack, ApiError> {
    tracing::info!(lecture_instance_id, locked, "toggling attendance lock");
    api.post("/teacher/lecture/lock")
        .query("lecture_instance_id", lecture_instance_id)
        .query("locked", locked)
        .fetch()
        .await
}

/// `POST /teacher/lectures/{id}?teacher_id,action,concept`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn control_lecture(
    api: &ApiClient,
    lecture_instance_id: &str,
    teacher_id: &str,
    action: &LectureAction,
) -> Result<Ack, ApiError> {
    tracing::info!(lecture_instance_id, action = action.as_str(), "controlling lecture");
    api.post(&format!("/teacher/lectures/{lecture_instance_id}"))
        .query("teacher_id", teacher_id)
        .query("action", action.as_str())
        .query_opt("concept", action.concept())
        .fetch()
        .await
}

#[cfg(test)]
#[path = "teacher_test.rs"]
mod tests;
