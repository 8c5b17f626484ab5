use super::*;

fn lecture(status: Option<&str>) -> TeacherLecture {
    TeacherLecture {
        lecture_instance_id: "9".to_owned(),
        status: status.map(str::to_owned),
        ..TeacherLecture::default()
    }
}

#[test]
fn time_label_needs_both_ends() {
    let mut l = lecture(None);
    assert_eq!(time_label(&l), "Time TBD");
    l.start_time = Some("09:00".to_owned());
    l.end_time = Some("10:00".to_owned());
    assert_eq!(time_label(&l), "09:00 - 10:00");
}

#[test]
fn running_lectures_offer_close() {
    assert!(is_running(&lecture(Some("active"))));
    assert!(!is_running(&lecture(Some("CLOSED"))));
    assert!(!is_running(&lecture(None)));
}

#[test]
fn lock_label_flips_with_state() {
    assert_eq!(lock_label(true), "Unlock attendance");
    assert_eq!(lock_label(false), "Lock attendance");
}
