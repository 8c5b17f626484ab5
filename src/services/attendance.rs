//! Attendance overviews and per-lecture reports.

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{LectureReport, StudentOverview, TeacherOverview};
use crate::views::dates::DateRange;

/// `GET /attendance/student/overview?user_id,start_date,end_date`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn student_overview(api: &ApiClient, user_id: &str, range: &DateRange) -> Result<StudentOverview, ApiError> {
    api.get("/attendance/student/overview")
        .query("user_id", user_id)
        .query("start_date", range.start_iso())
        .query("end_date", range.end_iso())
        .fetch()
        .await
}

/// `GET /attendance/teacher/overview?teacher_id,start_date,end_date`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn teacher_overview(api: &ApiClient, teacher_id: &str, range: &DateRange) -> Result<TeacherOverview, ApiError> {
    api.get("/attendance/teacher/overview")
        .query("teacher_id", teacher_id)
        .query("start_date", range.start_iso())
        .query("end_date", range.end_iso())
        .fetch()
        .await
}

/// `GET /teacher/lectures/{id}/attendance`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn lecture_attendance(api: &ApiClient, lecture_instance_id: &str) -> Result<LectureReport, ApiError> {
    api.get(&format!("/teacher/lectures/{lecture_instance_id}/attendance"))
        .fetch()
        .await
}

#[cfg(test)]
#[path = "attendance_test.rs"]
mod tests;
