//! Plain-text renderings of portal pages.
//!
//! Each function returns the full text block so the command layer decides
//! where it goes. Tables use fixed-width columns; nothing here wraps.

use portal::services::appeals::AppealStatus;
use portal::services::assistant::{ChatLog, Speaker};
use portal::types::{Appeal, ClassInfo, Submission, SubmissionStatus, SubjectSummary, TeacherSchedule, User};
use portal::views::status::processing_icon;
use portal::views::student::{CalendarRow, LectureCard, is_low_attendance};
use portal::views::teacher::{
    AnalysisView, EMPTY_ROSTER_MESSAGE, NO_MATCHING_RECORDS_MESSAGE, OverviewRow, ReportRow, enrollment_label,
};

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

// =============================================================================
// STUDENT
// =============================================================================

pub fn profile(user: &User) -> String {
    let mut out = String::new();
    line(&mut out, format!("Name:     {}", user.display_name()));
    line(&mut out, format!("User ID:  {}", user.user_id));
    line(&mut out, format!("Username: {}", user.username));
    line(&mut out, format!("Role:     {}", user.role));
    if let Some(dept) = user.dept.as_deref() {
        line(&mut out, format!("Dept:     {dept}"));
    }
    out
}

pub fn enrolled_classes(classes: &[ClassInfo]) -> String {
    let mut out = String::from("Enrolled Classes\n");
    if classes.is_empty() {
        line(&mut out, "  Not enrolled in any classes.");
        return out;
    }
    for class in classes {
        line(
            &mut out,
            format!(
                "  {:<8} {}  (Sem {} | {})",
                class.class_code,
                class.class_name,
                or_dash(class.semester.as_deref()),
                or_dash(class.department.as_deref())
            ),
        );
    }
    out
}

pub fn lecture_cards(cards: &[LectureCard]) -> String {
    let mut out = String::from("Today's Lectures\n");
    if cards.is_empty() {
        line(&mut out, "  No lectures scheduled for today.");
        return out;
    }
    for card in cards {
        line(
            &mut out,
            format!(
                "  {} {:<10} {:<28} {:<16} {}",
                card.badge.icon, card.badge.text, card.subject_name, card.class_code, card.time_label
            ),
        );
        if card.can_upload(false) {
            line(&mut out, format!("      upload: portal student upload --lecture {} <FILE>", card.lecture_instance_id));
        } else if card.shows_closed_notice() {
            line(&mut out, "      Session ended. No submission possible.");
        }
    }
    out
}

pub fn calendar(rows: &[CalendarRow]) -> String {
    let mut out = String::new();
    line(
        &mut out,
        format!("{:<4}{:<12}{:<11}{:<6}{:<13}{:<13}{:<13}{:<13}{:<13}", "#", "Date", "Day", "Order", "1st", "2nd", "3rd", "4th", "5th"),
    );
    for row in rows {
        let mut text = format!("{:<4}{:<12}{:<11}{:<6}", row.index, row.date, row.day, row.day_order);
        for cell in &row.cells {
            text.push_str(&format!("{:<13}", cell.label.as_deref().unwrap_or("-")));
        }
        line(&mut out, text.trim_end());
    }
    out
}

pub fn summary(items: &[SubjectSummary]) -> String {
    let mut out = String::from("Subject-wise Summary\n");
    line(
        &mut out,
        format!("  {:<28}{:>8}{:>8}{:>5}{:>7}{:>9}", "Subject", "Present", "Absent", "OD", "Total", "Percent"),
    );
    for s in items {
        let flag = if is_low_attendance(s.percentage) { "  low" } else { "" };
        line(
            &mut out,
            format!(
                "  {:<28}{:>8}{:>8}{:>5}{:>7}{:>8}%{flag}",
                s.subject, s.present, s.absent, s.od, s.total, s.percentage
            ),
        );
    }
    out
}

pub fn submissions(items: &[Submission]) -> String {
    let mut out = String::new();
    if items.is_empty() {
        line(&mut out, "No submissions yet.");
        return out;
    }
    for s in items {
        line(
            &mut out,
            format!(
                "{:<26} {:<8} {:<28} {}",
                or_dash(s.date.as_deref()),
                or_dash(s.subject_code.as_deref()),
                or_dash(s.subject_name.as_deref()),
                or_dash(s.image_url.as_deref())
            ),
        );
    }
    out
}

pub fn submission_status(status: &SubmissionStatus) -> String {
    let mut out = String::new();
    for (label, value) in [
        ("OCR", status.ocr_status.as_deref()),
        ("AI review", status.ai_status.as_deref()),
        ("Similarity", status.similarity_status.as_deref()),
    ] {
        line(&mut out, format!("{} {label}: {}", processing_icon(value), or_dash(value)));
    }
    out
}

// =============================================================================
// TEACHER
// =============================================================================

pub fn schedule(schedule: &TeacherSchedule) -> String {
    let mut out = String::new();
    if let Some(date) = schedule.date.as_deref() {
        line(&mut out, format!("Schedule for {date}"));
    }
    if schedule.lectures.is_empty() {
        line(&mut out, "No lectures scheduled for today.");
        return out;
    }
    for l in &schedule.lectures {
        let time = match (l.start_time.as_deref(), l.end_time.as_deref()) {
            (Some(start), Some(end)) => format!("{start} - {end}"),
            _ => "Time TBD".to_owned(),
        };
        let lock = if l.attendance_locked { "locked" } else { "open" };
        line(
            &mut out,
            format!(
                "{:<12} {:<8} {:<28} {:<15} {:<8} {}",
                l.lecture_instance_id,
                or_dash(l.class_code.as_deref()),
                or_dash(l.subject_name.as_deref().or(l.class_name.as_deref())),
                time,
                lock,
                or_dash(l.status.as_deref())
            ),
        );
    }
    out
}

pub fn teacher_classes(classes: &[ClassInfo]) -> String {
    let mut out = format!("Your Assigned Classes ({})\n", classes.len());
    for class in classes {
        line(
            &mut out,
            format!(
                "  {:<8} {:<30} Semester {} | {} | {}",
                class.class_code,
                class.class_name,
                or_dash(class.semester.as_deref()),
                or_dash(class.department.as_deref()),
                enrollment_label(class)
            ),
        );
    }
    out
}

pub fn roster(class: &ClassInfo) -> String {
    let mut out = format!("{} ({})\n", class.class_name, class.class_code);
    if class.students.is_empty() {
        line(&mut out, format!("  {EMPTY_ROSTER_MESSAGE}"));
        return out;
    }
    line(&mut out, format!("  {:<14}{:<28}{}", "Reg. Number", "Student Name", "Dept"));
    for s in &class.students {
        line(&mut out, format!("  {:<14}{:<28}{}", s.username, s.name, or_dash(s.dept.as_deref())));
    }
    out
}

pub fn overview(rows: &[OverviewRow]) -> String {
    let mut out = String::new();
    line(
        &mut out,
        format!(
            "{:<12}{:<6}{:<24}{:>8}{:>8}{:>5}{:>9}{:>7}{:>9}",
            "Date", "Hour", "Subject", "Present", "Absent", "OD", "Pending", "Total", "Percent"
        ),
    );
    for row in rows {
        match row {
            OverviewRow::Placeholder { message, .. } => line(&mut out, format!("{message:^88}").trim_end()),
            OverviewRow::Lecture(l) => {
                let flag = if l.low { "  low" } else { "" };
                line(
                    &mut out,
                    format!(
                        "{:<12}{:<6}{:<24}{:>8}{:>8}{:>5}{:>9}{:>7}{:>9}{flag}   {}",
                        l.date,
                        l.hour_slot,
                        l.subject,
                        l.present,
                        l.absent,
                        l.od,
                        l.pending,
                        l.total,
                        l.percentage_label(),
                        l.report_path
                    ),
                );
            }
        }
    }
    out
}

pub fn report(rows: &[ReportRow], total: usize) -> String {
    let mut out = String::new();
    line(&mut out, portal::views::teacher::showing_label(rows.len(), total));
    if rows.is_empty() {
        line(&mut out, NO_MATCHING_RECORDS_MESSAGE);
        return out;
    }
    for r in rows {
        line(
            &mut out,
            format!(
                "{:<12}{:<24}{:<9}{:<8}{:<18}{}  {}",
                r.username,
                r.name,
                r.decision,
                r.understanding,
                r.submitted_at,
                r.reason,
                r.upload_url.as_deref().unwrap_or("-")
            ),
        );
    }
    out
}

pub fn appeals(items: &[Appeal], status: AppealStatus) -> String {
    let mut out = String::new();
    if items.is_empty() {
        line(&mut out, status.empty_message());
        return out;
    }
    for a in items {
        line(
            &mut out,
            format!(
                "#{} {} ({}) {} {} | currently {} | {}",
                a.appeal_id,
                or_dash(a.student_name.as_deref()),
                or_dash(a.student_id.as_deref()),
                or_dash(a.class_code.as_deref()),
                or_dash(a.lecture_date.as_deref()),
                or_dash(a.current_decision.as_deref()),
                or_dash(a.appeal_status.as_deref())
            ),
        );
        line(&mut out, format!("    reason:   {}", or_dash(a.reason.as_deref())));
        line(&mut out, format!("    evidence: {}", or_dash(a.evidence_url.as_deref())));
        if status != AppealStatus::Pending {
            line(
                &mut out,
                format!("    comment:  {}", a.teacher_comment.as_deref().unwrap_or("No comment provided.")),
            );
        }
    }
    out
}

pub fn analysis(view: &AnalysisView) -> String {
    let mut out = String::new();
    line(&mut out, format!("Max similarity: {} [{}]", view.similarity, view.similarity_class));
    if let Some(source) = view.copied_from.as_deref() {
        line(&mut out, format!("Copied from:    submission {source}"));
    }
    line(&mut out, format!("AI score:       {} [{}]", view.ai_score, view.ai_score_class));
    line(&mut out, format!("AI confidence:  {} [{}]", view.confidence, view.confidence_class));
    line(&mut out, format!("AI reasoning:   {}", view.ai_reason));
    out
}

pub fn chat(log: &ChatLog) -> String {
    let mut out = String::new();
    for message in log.messages() {
        let who = match message.speaker {
            Speaker::User => "you",
            Speaker::Assistant => "assistant",
        };
        line(&mut out, format!("{who}> {}", message.content));
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
