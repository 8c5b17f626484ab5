//! Teacher overview, report and appeal models.

use crate::routes::AppRoute;
use crate::types::{Appeal, AppealAnalysis, ClassInfo, OverviewLecture, ReportStudent};
use crate::views::status::{ai_score_badge, confidence_badge, decision_class, similarity_badge, understanding_class};
use crate::views::student::is_low_attendance;

pub const OVERVIEW_COLUMNS: usize = 9;
pub const NO_LECTURES_MESSAGE: &str = "No lectures found for the selected range.";
pub const NO_MATCHING_RECORDS_MESSAGE: &str = "No records match the selected filters.";
pub const EMPTY_ROSTER_MESSAGE: &str = "No students enrolled in this class.";

// =============================================================================
// OVERVIEW
// =============================================================================

/// `(present + od) / total * 100`, one decimal; 0 for an empty lecture.
#[must_use]
pub fn attendance_percentage(present: u32, od: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(present + od) / f64::from(total) * 100.0;
    (pct * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewLine {
    pub lecture_instance_id: String,
    pub date: String,
    pub hour_slot: String,
    pub subject: String,
    pub present: u32,
    pub absent: u32,
    pub od: u32,
    pub pending: u32,
    pub total: u32,
    pub percentage: f64,
    pub low: bool,
    /// Drill-down to the per-student report.
    pub report_path: String,
}

impl OverviewLine {
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverviewRow {
    Lecture(OverviewLine),
    /// Single full-width row when the range has no lectures.
    Placeholder { colspan: usize, message: &'static str },
}

/// Table body for the teacher overview. Never empty.
#[must_use]
pub fn overview_rows(lectures: &[OverviewLecture]) -> Vec<OverviewRow> {
    if lectures.is_empty() {
        return vec![OverviewRow::Placeholder { colspan: OVERVIEW_COLUMNS, message: NO_LECTURES_MESSAGE }];
    }
    lectures
        .iter()
        .map(|l| {
            let percentage = attendance_percentage(l.present, l.od, l.total);
            OverviewRow::Lecture(OverviewLine {
                lecture_instance_id: l.lecture_instance_id.clone(),
                date: l.date.clone(),
                hour_slot: l.hour_slot.clone().unwrap_or_default(),
                subject: l.subject.clone(),
                present: l.present,
                absent: l.absent,
                od: l.od,
                pending: l.pending,
                total: l.total,
                percentage,
                low: is_low_attendance(percentage),
                report_path: AppRoute::TeacherReport(l.lecture_instance_id.clone()).to_path(),
            })
        })
        .collect()
}

// =============================================================================
// REPORT
// =============================================================================

pub const DECISION_FILTERS: [&str; 5] = ["ALL", "PRESENT", "ABSENT", "OD", "PENDING"];
pub const UNDERSTANDING_FILTERS: [&str; 4] = ["ALL", "HIGH", "MEDIUM", "POOR"];

/// Dropdown state on the lecture report page. `ALL` disables a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub decision: String,
    pub understanding: String,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self { decision: "ALL".to_owned(), understanding: "ALL".to_owned() }
    }
}

impl ReportFilter {
    #[must_use]
    pub fn apply<'a>(&self, students: &'a [ReportStudent]) -> Vec<&'a ReportStudent> {
        students
            .iter()
            .filter(|s| matches_filter(&self.decision, s.decision.as_deref()))
            .filter(|s| matches_filter(&self.understanding, s.conceptual_understanding.as_deref()))
            .collect()
    }
}

fn matches_filter(filter: &str, value: Option<&str>) -> bool {
    filter.eq_ignore_ascii_case("ALL") || value.unwrap_or_default().eq_ignore_ascii_case(filter)
}

#[must_use]
pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} students")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub username: String,
    pub name: String,
    pub decision: String,
    pub decision_class: &'static str,
    pub understanding: String,
    pub understanding_class: &'static str,
    pub reason: String,
    pub submitted_at: String,
    pub upload_url: Option<String>,
}

impl From<&ReportStudent> for ReportRow {
    fn from(s: &ReportStudent) -> Self {
        Self {
            username: s.username.clone(),
            name: s.name.clone(),
            decision: s.decision.clone().unwrap_or_else(|| "N/A".to_owned()),
            decision_class: decision_class(s.decision.as_deref()),
            understanding: s.conceptual_understanding.clone().unwrap_or_else(|| "N/A".to_owned()),
            understanding_class: understanding_class(s.conceptual_understanding.as_deref()),
            reason: s.reason.clone().filter(|r| !r.is_empty()).unwrap_or_else(|| "-".to_owned()),
            submitted_at: s.created_at.clone().unwrap_or_else(|| "-".to_owned()),
            upload_url: s.upload_url.clone().filter(|u| !u.is_empty()),
        }
    }
}

// =============================================================================
// APPEALS
// =============================================================================

/// Drop a resolved appeal from the visible list.
pub fn remove_appeal(appeals: &mut Vec<Appeal>, appeal_id: &str) {
    appeals.retain(|a| a.appeal_id != appeal_id);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub similarity: String,
    pub similarity_class: &'static str,
    pub copied_from: Option<String>,
    pub ai_score: String,
    pub ai_score_class: &'static str,
    pub ai_reason: String,
    pub confidence: String,
    pub confidence_class: String,
}

impl From<&AppealAnalysis> for AnalysisView {
    fn from(a: &AppealAnalysis) -> Self {
        let similarity = a.max_similarity.unwrap_or(0.0);
        let score = a.ai_score.unwrap_or(0.0);
        Self {
            similarity: format!("{:.1}%", similarity * 100.0),
            similarity_class: similarity_badge(similarity),
            copied_from: a.copied_from_submission_id.clone(),
            ai_score: a.ai_score.map_or_else(|| "N/A".to_owned(), |s| format!("{s}")),
            ai_score_class: ai_score_badge(score),
            ai_reason: a.ai_reason.clone().unwrap_or_else(|| "No reasoning provided.".to_owned()),
            confidence: a.ai_confidence.clone().unwrap_or_else(|| "LOW".to_owned()),
            confidence_class: confidence_badge(a.ai_confidence.as_deref()),
        }
    }
}

// =============================================================================
// CLASSES
// =============================================================================

/// Card subtitle, e.g. `3 Students enrolled`.
#[must_use]
pub fn enrollment_label(class: &ClassInfo) -> String {
    format!("{} Students enrolled", class.students.len())
}

#[cfg(test)]
#[path = "teacher_test.rs"]
mod tests;
