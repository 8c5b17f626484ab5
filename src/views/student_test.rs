use super::*;
use std::collections::BTreeMap;

fn lecture() -> Lecture {
    Lecture {
        lecture_instance_id: "L1".to_owned(),
        class_code: Some("CS101".to_owned()),
        subject_name: Some("Data Structures".to_owned()),
        start_time: Some("09:00".to_owned()),
        end_time: Some("09:50".to_owned()),
        ..Lecture::default()
    }
}

// =============================================================================
// lecture cards
// =============================================================================

#[test]
fn card_formats_time_and_defaults_status() {
    let card = LectureCard::from(&lecture());
    assert_eq!(card.time_label, "09:00 - 09:50");
    assert_eq!(card.badge.text, "Pending");
    assert!(card.can_upload(false));
    assert!(!card.can_upload(true));
}

#[test]
fn card_without_times_or_names() {
    let bare = Lecture { lecture_instance_id: "L2".to_owned(), end_time: Some("10:00".to_owned()), ..Lecture::default() };
    let card = LectureCard::from(&bare);
    assert_eq!(card.time_label, "Time TBD");
    assert_eq!(card.class_code, "Unknown");
    assert_eq!(card.subject_name, "Unknown");
}

#[test]
fn finalized_card_blocks_upload_and_shows_notice() {
    let locked = Lecture { attendance_locked: true, ..lecture() };
    let card = LectureCard::from(&locked);
    assert!(!card.can_upload(false));
    assert!(card.shows_closed_notice());
}

#[test]
fn submitted_card_blocks_upload() {
    let submitted = Lecture { submission_id: Some("S1".to_owned()), ..lecture() };
    let cards = lecture_cards(&[submitted]);
    assert!(!cards[0].can_upload(false));
    assert!(!cards[0].shows_closed_notice());
}

// =============================================================================
// calendar
// =============================================================================

#[test]
fn subject_code_splits_label() {
    assert_eq!(subject_code("CS101 - Intro to CS"), "CS101");
    assert_eq!(subject_code("MA201"), "MA201");
}

#[test]
fn calendar_rows_have_five_cells() {
    let mut hours = BTreeMap::new();
    hours.insert(
        "2".to_owned(),
        Some(HourCell { subject: "CS101 - Intro".to_owned(), status: Some("PRESENT".to_owned()) }),
    );
    hours.insert("3".to_owned(), None);
    let day = CalendarDay { date: "2024-01-02".to_owned(), day: Some("Tue".to_owned()), day_order: None, hours };

    let rows = calendar_rows(&[day]);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.index, 1);
    assert_eq!(row.cells.len(), 5);
    assert_eq!(row.cells[1].label.as_deref(), Some("[P] CS101"));
    assert_eq!(row.cells[1].class, "status-present");
    assert_eq!(row.cells[1].subject_code.as_deref(), Some("CS101"));
    assert_eq!(row.cells[2].label, None);
    assert_eq!(row.cells[2].class, "status-none");
}

#[test]
fn cell_label_without_status() {
    let cell = HourCell { subject: "PH101 - Physics".to_owned(), status: None };
    assert_eq!(cell_label(&cell), "[] PH101");
}

#[test]
fn low_attendance_threshold() {
    let summary = vec![
        SubjectSummary { subject: "CS101".to_owned(), percentage: 74.9, ..SubjectSummary::default() },
        SubjectSummary { subject: "MA201".to_owned(), percentage: 75.0, ..SubjectSummary::default() },
    ];
    let low = low_subjects(&summary);
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].subject, "CS101");
}
