//! Wire DTOs for the attendance backend.
//!
//! DESIGN
//! ======
//! Backend payloads are read and displayed, never edited, so decoding is
//! permissive: absent fields default, and identifiers accept either JSON
//! strings or numbers and are normalized to `String`. The lecture identifier
//! is always `lecture_instance_id` on the Rust side; the `id` spelling some
//! endpoints use is accepted as an alias at decode time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// ROLES AND IDENTITY
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Landing page after login.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Student => "/student",
            Self::Teacher => "/teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`: expected student or teacher")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            _ => Err(UnknownRole(s.to_owned())),
        }
    }
}

/// `POST /auth/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub role: Role,
}

/// `GET /auth/me` identity. Re-fetched on every guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub dept: Option<String>,
}

impl User {
    /// Full name when known, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

// =============================================================================
// STUDENT
// =============================================================================

/// One entry of `GET /lectures/today`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Lecture {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    pub lecture_instance_id: String,
    #[serde(default)]
    pub class_code: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub attendance_status: Option<String>,
    #[serde(default, deserialize_with = "bool_or_null")]
    pub attendance_locked: bool,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub submission_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TodayLectures {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub lectures: Vec<Lecture>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RosterStudent {
    #[serde(deserialize_with = "string_or_number")]
    pub student_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dept: Option<String>,
}

/// A class as listed by `GET /classes` and `GET /teacher/classes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClassInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub class_id: String,
    #[serde(default)]
    pub class_code: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub semester: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Enrolled students; only the teacher endpoint fills this.
    #[serde(default, deserialize_with = "vec_or_null")]
    pub students: Vec<RosterStudent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClassList {
    #[serde(default, deserialize_with = "vec_or_null")]
    pub classes: Vec<ClassInfo>,
}

/// A filled calendar slot: `"CS101 - Intro"` plus a status.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HourCell {
    pub subject: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub day_order: Option<String>,
    /// Keyed by hour slot `"1"`..`"5"`; `null` for an empty slot.
    #[serde(default)]
    pub hours: BTreeMap<String, Option<HourCell>>,
}

impl CalendarDay {
    #[must_use]
    pub fn cell(&self, slot: u8) -> Option<&HourCell> {
        self.hours.get(&slot.to_string()).and_then(Option::as_ref)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SubjectSummary {
    pub subject: String,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
    #[serde(default)]
    pub od: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub percentage: f64,
}

/// `GET /attendance/student/overview`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StudentOverview {
    #[serde(default, deserialize_with = "vec_or_null")]
    pub calendar: Vec<CalendarDay>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub summary: Vec<SubjectSummary>,
}

/// `POST /lectures/resolve`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResolvedLecture {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    pub lecture_instance_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub subject_code: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// `POST /upload` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// `GET /submissions/{id}` processing state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionStatus {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub ocr_status: Option<String>,
    #[serde(default)]
    pub ai_status: Option<String>,
    #[serde(default)]
    pub similarity_status: Option<String>,
}

// =============================================================================
// TEACHER
// =============================================================================

/// One entry of `GET /teacher/lectures/today`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TeacherLecture {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    pub lecture_instance_id: String,
    #[serde(default)]
    pub class_code: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub hour_slot: Option<String>,
    /// Lecture lifecycle state as reported by the backend.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "bool_or_null")]
    pub attendance_locked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TeacherSchedule {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub lectures: Vec<TeacherLecture>,
}

/// One summary row of `GET /attendance/teacher/overview`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct OverviewLecture {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    pub lecture_instance_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub hour_slot: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
    #[serde(default)]
    pub od: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TeacherOverview {
    #[serde(default, deserialize_with = "vec_or_null")]
    pub lectures: Vec<OverviewLecture>,
}

/// Per-student row of `GET /teacher/lectures/{id}/attendance`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReportStudent {
    #[serde(deserialize_with = "string_or_number")]
    pub student_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default)]
    pub conceptual_understanding: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub upload_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LectureReport {
    #[serde(default, deserialize_with = "vec_or_null")]
    pub students: Vec<ReportStudent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Appeal {
    #[serde(deserialize_with = "string_or_number")]
    pub appeal_id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub class_code: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub lecture_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub lecture_instance_id: Option<String>,
    #[serde(default)]
    pub appeal_status: Option<String>,
    #[serde(default)]
    pub current_decision: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub evidence_url: Option<String>,
    #[serde(default)]
    pub teacher_comment: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AppealList {
    #[serde(default, deserialize_with = "vec_or_null")]
    pub appeals: Vec<Appeal>,
}

/// Plagiarism and AI grading signals for one student's lecture submission.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AppealAnalysis {
    #[serde(default)]
    pub max_similarity: Option<f64>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub copied_from_submission_id: Option<String>,
    #[serde(default)]
    pub ai_score: Option<f64>,
    #[serde(default)]
    pub ai_reason: Option<String>,
    #[serde(default)]
    pub ai_confidence: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Acknowledgement bodies of mutating endpoints are opaque.
pub type Ack = Value;

// =============================================================================
// DECODE HELPERS
// =============================================================================

fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected string or number identifier, got {other}"))),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string::<D::Error>(value)?.ok_or_else(|| D::Error::custom("identifier is null"))
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string::<D::Error>(value)
}

fn bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
