use super::*;
use serde_json::json;

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("Teacher".parse::<Role>(), Ok(Role::Teacher));
    assert_eq!(" student ".parse::<Role>(), Ok(Role::Student));
    assert!("admin".parse::<Role>().is_err());
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Student.home_path(), "/student");
    assert_eq!(Role::Teacher.home_path(), "/teacher");
}

#[test]
fn login_response_decodes_backend_shape() {
    let body = json!({
        "access_token": "T1",
        "token_type": "bearer",
        "username": "alice",
        "role": "student"
    });
    let login: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(login.access_token, "T1");
    assert_eq!(login.role, Role::Student);
}

#[test]
fn user_display_name_falls_back_to_username() {
    let user: User = serde_json::from_value(json!({
        "user_id": 7, "username": "bob", "name": "", "role": "teacher"
    }))
    .unwrap();
    assert_eq!(user.user_id, "7");
    assert_eq!(user.display_name(), "bob");
    assert_eq!(user.dept, None);
}

#[test]
fn lecture_accepts_id_alias_and_numeric_id() {
    let lecture: Lecture = serde_json::from_value(json!({"id": 42, "attendance_locked": null})).unwrap();
    assert_eq!(lecture.lecture_instance_id, "42");
    assert!(!lecture.attendance_locked);
}

#[test]
fn lecture_rejects_missing_identifier() {
    assert!(serde_json::from_value::<Lecture>(json!({"class_code": "CS101"})).is_err());
}

#[test]
fn class_list_tolerates_null_lists() {
    let list: ClassList = serde_json::from_value(json!({"classes": null})).unwrap();
    assert!(list.classes.is_empty());

    let list: ClassList = serde_json::from_value(json!({
        "classes": [{"class_id": "c1", "class_code": "CS101", "semester": 3, "students": null}]
    }))
    .unwrap();
    assert_eq!(list.classes[0].semester.as_deref(), Some("3"));
    assert!(list.classes[0].students.is_empty());
}

#[test]
fn calendar_day_reads_slot_cells() {
    let day: CalendarDay = serde_json::from_value(json!({
        "date": "2024-01-02",
        "day": "Tuesday",
        "day_order": 2,
        "hours": {
            "1": {"subject": "CS101 - Intro", "status": "PRESENT"},
            "2": null
        }
    }))
    .unwrap();
    assert_eq!(day.cell(1).map(|c| c.subject.as_str()), Some("CS101 - Intro"));
    assert_eq!(day.cell(2), None);
    assert_eq!(day.cell(5), None);
    assert_eq!(day.day_order.as_deref(), Some("2"));
}

#[test]
fn overview_rows_default_missing_counts() {
    let overview: TeacherOverview = serde_json::from_value(json!({
        "lectures": [{"lecture_instance_id": "L1", "date": "2024-01-05", "hour_slot": 3, "subject": "CS101"}]
    }))
    .unwrap();
    let row = &overview.lectures[0];
    assert_eq!(row.hour_slot.as_deref(), Some("3"));
    assert_eq!(row.total, 0);
}

#[test]
fn appeal_analysis_all_optional() {
    let analysis: AppealAnalysis = serde_json::from_value(json!({})).unwrap();
    assert_eq!(analysis, AppealAnalysis::default());
}
