//! Attendance appeals: filing, listing, resolution and evidence analysis.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::pipeline::{Pipeline, PipelineError};
use crate::types::{Ack, AppealAnalysis, AppealList};

/// Appeal list filter; the backend also reports these as `appeal_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppealStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AppealStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Empty-state text for a filtered list.
    #[must_use]
    pub fn empty_message(self) -> String {
        format!("No {} appeals found", self.as_str().to_ascii_lowercase())
    }
}

impl fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppealStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ApiError::Rejected(format!("unknown appeal status `{s}`"))),
        }
    }
}

/// A teacher's ruling on an appeal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppealDecision {
    Approved,
    Rejected,
}

impl AppealDecision {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl FromStr for AppealDecision {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "APPROVED" | "APPROVE" => Ok(Self::Approved),
            "REJECTED" | "REJECT" => Ok(Self::Rejected),
            _ => Err(ApiError::Rejected(format!("unknown appeal decision `{s}`"))),
        }
    }
}

// =============================================================================
// STUDENT
// =============================================================================

/// `POST /attendance/appeal?user_id,lecture_instance_id,reason`
///
/// # Errors
///
/// [`ApiError::Rejected`] for a blank reason; otherwise the classified
/// request failure.
pub async fn submit_appeal(
    api: &ApiClient,
    user_id: &str,
    lecture_instance_id: &str,
    reason: &str,
) -> Result<Ack, ApiError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::Rejected("Please describe why this record is wrong.".to_owned()));
    }
    api.post("/attendance/appeal")
        .query("user_id", user_id)
        .query("lecture_instance_id", lecture_instance_id)
        .query("reason", reason)
        .fetch()
        .await
}

/// A calendar cell the student wants to contest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppealRequest {
    pub user_id: String,
    pub date: String,
    pub hour_slot: u8,
    pub subject_code: String,
    pub reason: String,
}

/// Resolve the cell's lecture instance, then file the appeal against it.
///
/// # Errors
///
/// Names the failing step (`resolve_lecture` or `submit_appeal`).
pub async fn appeal_calendar_cell(api: &ApiClient, request: AppealRequest) -> Result<Ack, PipelineError> {
    let resolve_api = api.clone();
    let appeal_api = api.clone();
    Pipeline::new()
        .then("resolve_lecture", move |req: AppealRequest| async move {
            let resolved = super::lectures::resolve_lecture_instance(
                &resolve_api,
                &req.user_id,
                &req.date,
                req.hour_slot,
                &req.subject_code,
            )
            .await?;
            Ok::<_, ApiError>((req, resolved.lecture_instance_id))
        })
        .then("submit_appeal", move |(req, lecture_instance_id): (AppealRequest, String)| async move {
            submit_appeal(&appeal_api, &req.user_id, &lecture_instance_id, &req.reason).await
        })
        .run(request)
        .await
}

// =============================================================================
// TEACHER
// =============================================================================

/// `GET /teacher/appeals?teacher_id,status`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn teacher_appeals(api: &ApiClient, teacher_id: &str, status: AppealStatus) -> Result<AppealList, ApiError> {
    api.get("/teacher/appeals")
        .query("teacher_id", teacher_id)
        .query("status", status)
        .fetch()
        .await
}

/// `POST /teacher/appeals/{id}/resolve?teacher_id,decision,teacher_comment`
///
/// A blank comment is omitted.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn resolve_appeal(
    api: &ApiClient,
    appeal_id: &str,
    teacher_id: &str,
    decision: AppealDecision,
    comment: Option<&str>,
) -> Result<Ack, ApiError> {
    let comment = comment.map(str::trim).filter(|c| !c.is_empty());
    api.post(&format!("/teacher/appeals/{appeal_id}/resolve"))
        .query("teacher_id", teacher_id)
        .query("decision", decision.as_str())
        .query_opt("teacher_comment", comment)
        .fetch()
        .await
}

/// `GET /teacher/appeals/studata?lecture_instance_id,student_id`
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn student_appeal_data(
    api: &ApiClient,
    lecture_instance_id: &str,
    student_id: &str,
) -> Result<AppealAnalysis, ApiError> {
    api.get("/teacher/appeals/studata")
        .query("lecture_instance_id", lecture_instance_id)
        .query("student_id", student_id)
        .fetch()
        .await
}

#[cfg(test)]
#[path = "appeals_test.rs"]
mod tests;
