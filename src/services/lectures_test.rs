use super::*;
use crate::http::Method;
use crate::test_support::{MockTransport, client_with};
use serde_json::json;

#[tokio::test]
async fn today_lectures_sends_user_id() {
    let transport = MockTransport::new();
    transport.push_json(
        200,
        json!({"date": "2024-01-02", "lectures": [{"lecture_instance_id": "L1", "class_code": "CS101"}]}),
    );
    let (api, _) = client_with(&transport, Some("T1"));

    let today = today_lectures(&api, "u1").await.unwrap();
    assert_eq!(today.lectures.len(), 1);
    assert_eq!(today.lectures[0].lecture_instance_id, "L1");

    let req = transport.last_request();
    assert_eq!(req.method, Method::Get);
    assert!(req.url.ends_with("/lectures/today"));
    assert_eq!(req.query_value("user_id"), Some("u1"));
}

#[tokio::test]
async fn my_classes_decodes_class_list() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"user_id": "u1", "classes": [{"class_id": 3, "class_code": "MA201"}]}));
    let (api, _) = client_with(&transport, Some("T1"));

    let classes = my_classes(&api, "u1").await.unwrap();
    assert_eq!(classes.classes[0].class_id, "3");
    assert!(transport.last_request().url.ends_with("/classes"));
}

#[tokio::test]
async fn resolve_posts_all_cell_coordinates() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"lecture_instance_id": "L9"}));
    let (api, _) = client_with(&transport, Some("T1"));

    let resolved = resolve_lecture_instance(&api, "u1", "2024-01-02", 3, "CS101").await.unwrap();
    assert_eq!(resolved.lecture_instance_id, "L9");

    let req = transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.query_value("date"), Some("2024-01-02"));
    assert_eq!(req.query_value("hour_slot"), Some("3"));
    assert_eq!(req.query_value("subject_code"), Some("CS101"));
}

#[tokio::test]
async fn not_found_surfaces_unchanged() {
    let transport = MockTransport::new();
    transport.push_json(404, json!({"detail": "No lecture in that slot"}));
    let (api, _) = client_with(&transport, Some("T1"));

    let err = resolve_lecture_instance(&api, "u1", "2024-01-02", 1, "CS101").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound { detail: "No lecture in that slot".to_owned() });
}
