use super::*;
use portal::types::{HourCell, Lecture};
use portal::views::student::calendar_rows;
use portal::views::teacher::overview_rows;
use std::collections::BTreeMap;

#[test]
fn empty_overview_prints_placeholder() {
    let text = overview(&overview_rows(&[]));
    assert!(text.contains("No lectures found for the selected range."));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn empty_appeals_print_status_specific_message() {
    assert_eq!(appeals(&[], AppealStatus::Approved).trim(), "No approved appeals found");
}

#[test]
fn lecture_card_offers_upload_hint() {
    let lecture = Lecture { lecture_instance_id: "L1".to_owned(), ..Lecture::default() };
    let text = lecture_cards(&[LectureCard::from(&lecture)]);
    assert!(text.contains("--lecture L1"));
    assert!(text.contains("Time TBD"));
}

#[test]
fn calendar_prints_cell_labels() {
    let mut hours = BTreeMap::new();
    hours.insert("1".to_owned(), Some(HourCell { subject: "CS101 - Intro".to_owned(), status: Some("ABSENT".to_owned()) }));
    let day = portal::types::CalendarDay { date: "2024-01-02".to_owned(), hours, ..Default::default() };
    let text = calendar(&calendar_rows(&[day]));
    assert!(text.contains("[A] CS101"));
}

#[test]
fn report_shows_counts_and_empty_message() {
    let text = report(&[], 4);
    assert!(text.starts_with("Showing 0 of 4 students"));
    assert!(text.contains(NO_MATCHING_RECORDS_MESSAGE));
}

#[test]
fn chat_starts_with_greeting() {
    let text = chat(&ChatLog::default());
    assert!(text.starts_with("assistant> Hello!"));
}
