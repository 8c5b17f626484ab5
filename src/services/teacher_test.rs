use super::*;
use crate::test_support::{MockTransport, client_with};
use serde_json::json;

#[tokio::test]
async fn schedule_uses_teacher_id() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"lectures": [{"id": "L1", "attendance_locked": true}]}));
    let (api, _) = client_with(&transport, Some("T1"));

    let schedule = teacher_schedule(&api, "T42").await.unwrap();
    assert_eq!(schedule.lectures[0].lecture_instance_id, "L1");
    assert!(schedule.lectures[0].attendance_locked);
    let req = transport.last_request();
    assert!(req.url.ends_with("/teacher/lectures/today"));
    assert_eq!(req.query_value("teacher_id"), Some("T42"));
}

#[tokio::test]
async fn classes_include_rosters() {
    let transport = MockTransport::new();
    transport.push_json(
        200,
        json!({"classes": [{
            "class_id": "c1", "class_code": "CS101", "class_name": "Intro",
            "semester": 1, "department": "CSE",
            "students": [{"student_id": "s1", "username": "21CS001", "name": "Ann", "dept": "CSE"}]
        }]}),
    );
    let (api, _) = client_with(&transport, Some("T1"));

    let classes = teacher_classes(&api, "T42").await.unwrap();
    assert_eq!(classes.classes[0].students[0].username, "21CS001");
}

#[tokio::test]
async fn lock_sends_boolean_flag() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"locked": true}));
    let (api, _) = client_with(&transport, Some("T1"));

    toggle_lecture_lock(&api, "L1", true).await.unwrap();
    let req = transport.last_request();
    assert!(req.url.ends_with("/teacher/lecture/lock"));
    assert_eq!(req.query_value("locked"), Some("true"));
}

#[tokio::test]
async fn start_sends_concept_and_close_omits_it() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({}));
    transport.push_json(200, json!({}));
    let (api, _) = client_with(&transport, Some("T1"));

    let start = LectureAction::Start { concept: Some("Recursion".to_owned()) };
    control_lecture(&api, "L1", "T42", &start).await.unwrap();
    let req = transport.last_request();
    assert!(req.url.ends_with("/teacher/lectures/L1"));
    assert_eq!(req.query_value("action"), Some("START"));
    assert_eq!(req.query_value("concept"), Some("Recursion"));

    control_lecture(&api, "L1", "T42", &LectureAction::Close).await.unwrap();
    let req = transport.last_request();
    assert_eq!(req.query_value("action"), Some("CLOSE"));
    assert_eq!(req.query_value("concept"), None);
}
