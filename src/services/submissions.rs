//! Proof uploads and their processing state.
//!
//! Uploads are checked locally before any network IO: a file the backend
//! would refuse for size or type never leaves the client.

use crate::error::ApiError;
use crate::http::{ApiClient, FilePart, Part};
use crate::types::{Submission, SubmissionStatus, UploadReceipt};
use crate::views::format::format_file_size;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "application/pdf"];

/// What an upload is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    LectureInstance(String),
    Class(String),
}

impl UploadTarget {
    fn as_part(&self) -> Part {
        match self {
            Self::LectureInstance(id) => Part::text("lecture_instance_id", id.clone()),
            Self::Class(id) => Part::text("class_id", id.clone()),
        }
    }
}

/// Reject files the backend would refuse.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with a message suitable for inline display.
pub fn check_upload(file: &FilePart) -> Result<(), ApiError> {
    if file.bytes.is_empty() {
        return Err(ApiError::Rejected("The selected file is empty.".to_owned()));
    }
    if file.size() > MAX_UPLOAD_BYTES {
        return Err(ApiError::Rejected(format!(
            "File is too large ({}). Maximum size is {}.",
            format_file_size(file.size()),
            format_file_size(MAX_UPLOAD_BYTES)
        )));
    }
    let content_type = file.content_type.trim().to_ascii_lowercase();
    if !ALLOWED_UPLOAD_TYPES.contains(&content_type.as_str()) {
        return Err(ApiError::Rejected(format!(
            "Unsupported file type `{}`. Allowed: JPEG, PNG or PDF.",
            file.content_type
        )));
    }
    Ok(())
}

/// `GET /student/submissions`; the student is taken from the bearer token.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn student_submissions(api: &ApiClient) -> Result<Vec<Submission>, ApiError> {
    let submissions: Option<Vec<Submission>> = api.get("/student/submissions").fetch().await?;
    Ok(submissions.unwrap_or_default())
}

/// `POST /upload` as `multipart/form-data` with `user_id`, the target id and
/// `file`.
///
/// # Errors
///
/// [`ApiError::Rejected`] without a network call when [`check_upload`]
/// fails; otherwise the classified request failure.
pub async fn upload_submission(
    api: &ApiClient,
    user_id: &str,
    target: &UploadTarget,
    file: FilePart,
) -> Result<UploadReceipt, ApiError> {
    check_upload(&file)?;
    tracing::info!(size = file.size(), content_type = %file.content_type, "uploading submission");
    api.post("/upload")
        .multipart(vec![Part::text("user_id", user_id), target.as_part(), Part::file("file", file)])
        .fetch()
        .await
}

/// `GET /submissions/{id}`: OCR, AI and similarity processing state.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn submission_status(api: &ApiClient, submission_id: &str) -> Result<SubmissionStatus, ApiError> {
    api.get(&format!("/submissions/{submission_id}")).fetch().await
}

#[cfg(test)]
#[path = "submissions_test.rs"]
mod tests;
