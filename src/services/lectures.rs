//! Student lecture and class lookups.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{ClassList, ResolvedLecture, TodayLectures};

/// `GET /lectures/today?user_id`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn today_lectures(api: &ApiClient, user_id: &str) -> Result<TodayLectures, ApiError> {
    api.get("/lectures/today").query("user_id", user_id).fetch().await
}

/// `GET /classes?user_id`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn my_classes(api: &ApiClient, user_id: &str) -> Result<ClassList, ApiError> {
    api.get("/classes").query("user_id", user_id).fetch().await
}

/// `POST /lectures/resolve?user_id,date,hour_slot,subject_code`
///
/// Maps a calendar cell (date, hour slot, subject code) to its lecture
/// instance.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn resolve_lecture_instance(
    api: &ApiClient,
    user_id: &str,
    date: &str,
    hour_slot: u8,
    subject_code: &str,
) -> Result<ResolvedLecture, ApiError> {
    api.post("/lectures/resolve")
        .query("user_id", user_id)
        .query("date", date)
        .query("hour_slot", hour_slot)
        .query("subject_code", subject_code)
        .fetch()
        .await
}

#[cfg(test)]
#[path = "lectures_test.rs"]
mod tests;
