//! Student dashboard and attendance calendar models.

use crate::types::{CalendarDay, HourCell, Lecture, SubjectSummary};
use crate::views::status::{StatusBadge, calendar_cell_class, lecture_badge};

/// Hour slots per teaching day.
pub const HOUR_SLOTS: [u8; 5] = [1, 2, 3, 4, 5];

/// Below this percentage a subject is flagged.
pub const LOW_ATTENDANCE_PERCENT: f64 = 75.0;

// =============================================================================
// LECTURE CARDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureCard {
    pub lecture_instance_id: String,
    pub class_code: String,
    pub subject_name: String,
    pub time_label: String,
    pub badge: StatusBadge,
    /// Attendance locked by the teacher; no more submissions.
    pub finalized: bool,
    pub has_submission: bool,
}

impl LectureCard {
    /// Upload control is offered only for open lectures with nothing
    /// submitted and no upload in flight.
    #[must_use]
    pub fn can_upload(&self, uploading: bool) -> bool {
        !self.finalized && !self.has_submission && !uploading
    }

    /// "Session ended" notice for locked lectures with no submission.
    #[must_use]
    pub fn shows_closed_notice(&self) -> bool {
        self.finalized && !self.has_submission
    }
}

impl From<&Lecture> for LectureCard {
    fn from(lecture: &Lecture) -> Self {
        let time_label = match (lecture.start_time.as_deref(), lecture.end_time.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => format!("{start} - {end}"),
            _ => "Time TBD".to_owned(),
        };
        Self {
            lecture_instance_id: lecture.lecture_instance_id.clone(),
            class_code: or_unknown(lecture.class_code.as_deref()),
            subject_name: or_unknown(lecture.subject_name.as_deref()),
            time_label,
            badge: lecture_badge(lecture.attendance_status.as_deref()),
            finalized: lecture.attendance_locked,
            has_submission: lecture.submission_id.is_some(),
        }
    }
}

#[must_use]
pub fn lecture_cards(lectures: &[Lecture]) -> Vec<LectureCard> {
    lectures.iter().map(LectureCard::from).collect()
}

fn or_unknown(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("Unknown").to_owned()
}

// =============================================================================
// CALENDAR
// =============================================================================

/// `"CS101 - Intro to CS"` -> `"CS101"`.
#[must_use]
pub fn subject_code(subject: &str) -> &str {
    subject.split(" - ").next().unwrap_or(subject).trim()
}

/// `[P] CS101`: first letter of the status and the subject code.
#[must_use]
pub fn cell_label(cell: &HourCell) -> String {
    let letter = cell
        .status
        .as_deref()
        .and_then(|s| s.trim().chars().next())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();
    format!("[{letter}] {}", subject_code(&cell.subject))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCellView {
    pub slot: u8,
    pub class: &'static str,
    /// `None` for an empty slot.
    pub label: Option<String>,
    /// Present only for filled slots; these are the appealable ones.
    pub subject_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
    pub index: usize,
    pub date: String,
    pub day: String,
    pub day_order: String,
    pub cells: Vec<CalendarCellView>,
}

/// One row per day with exactly five slot cells.
#[must_use]
pub fn calendar_rows(calendar: &[CalendarDay]) -> Vec<CalendarRow> {
    calendar
        .iter()
        .enumerate()
        .map(|(i, day)| CalendarRow {
            index: i + 1,
            date: day.date.clone(),
            day: day.day.clone().unwrap_or_default(),
            day_order: day.day_order.clone().unwrap_or_default(),
            cells: HOUR_SLOTS
                .iter()
                .map(|&slot| match day.cell(slot) {
                    Some(cell) => CalendarCellView {
                        slot,
                        class: calendar_cell_class(cell.status.as_deref()),
                        label: Some(cell_label(cell)),
                        subject_code: Some(subject_code(&cell.subject).to_owned()),
                    },
                    None => CalendarCellView { slot, class: calendar_cell_class(None), label: None, subject_code: None },
                })
                .collect(),
        })
        .collect()
}

#[must_use]
pub fn is_low_attendance(percentage: f64) -> bool {
    percentage < LOW_ATTENDANCE_PERCENT
}

/// Summary rows flagged as low attendance.
#[must_use]
pub fn low_subjects(summary: &[SubjectSummary]) -> Vec<&SubjectSummary> {
    summary.iter().filter(|s| is_low_attendance(s.percentage)).collect()
}

#[cfg(test)]
#[path = "student_test.rs"]
mod tests;
