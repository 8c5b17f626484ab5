use super::*;
use crate::http::TransportError;
use crate::test_support::{MockTransport, client_with};
use serde_json::json;

fn cell_request() -> AppealRequest {
    AppealRequest {
        user_id: "u1".to_owned(),
        date: "2024-01-02".to_owned(),
        hour_slot: 2,
        subject_code: "CS101".to_owned(),
        reason: "I was present, see photo".to_owned(),
    }
}

#[test]
fn status_parsing_and_empty_message() {
    assert_eq!("approved".parse::<AppealStatus>().unwrap(), AppealStatus::Approved);
    assert_eq!(AppealStatus::default(), AppealStatus::Pending);
    assert_eq!(AppealStatus::Pending.empty_message(), "No pending appeals found");
    assert!("maybe".parse::<AppealStatus>().is_err());
}

#[test]
fn decision_accepts_verbs() {
    assert_eq!("approve".parse::<AppealDecision>().unwrap(), AppealDecision::Approved);
    assert_eq!("REJECTED".parse::<AppealDecision>().unwrap(), AppealDecision::Rejected);
}

#[tokio::test]
async fn submit_appeal_sends_query_params() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"status": "submitted"}));
    let (api, _) = client_with(&transport, Some("T1"));

    submit_appeal(&api, "u1", "L1", "  camera failed  ").await.unwrap();
    let req = transport.last_request();
    assert!(req.url.ends_with("/attendance/appeal"));
    assert_eq!(req.query_value("lecture_instance_id"), Some("L1"));
    assert_eq!(req.query_value("reason"), Some("camera failed"));
}

#[tokio::test]
async fn blank_reason_is_rejected_locally() {
    let transport = MockTransport::new();
    let (api, _) = client_with(&transport, Some("T1"));

    assert!(matches!(submit_appeal(&api, "u1", "L1", "   ").await, Err(ApiError::Rejected(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn calendar_appeal_resolves_then_submits() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"lecture_instance_id": 88}));
    transport.push_json(200, json!({"status": "submitted"}));
    let (api, _) = client_with(&transport, Some("T1"));

    appeal_calendar_cell(&api, cell_request()).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].url.ends_with("/lectures/resolve"));
    assert!(requests[1].url.ends_with("/attendance/appeal"));
    assert_eq!(requests[1].query_value("lecture_instance_id"), Some("88"));
}

#[tokio::test]
async fn calendar_appeal_stops_when_resolution_fails() {
    let transport = MockTransport::new();
    transport.push_error(TransportError::NoResponse("offline".to_owned()));
    let (api, _) = client_with(&transport, Some("T1"));

    let err = appeal_calendar_cell(&api, cell_request()).await.unwrap_err();
    assert_eq!(err.step, "resolve_lecture");
    assert!(err.source.is_unreachable());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn teacher_appeals_filters_by_status() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"appeals": [{"appeal_id": 5, "appeal_status": "REJECTED"}]}));
    let (api, _) = client_with(&transport, Some("T1"));

    let list = teacher_appeals(&api, "T42", AppealStatus::Rejected).await.unwrap();
    assert_eq!(list.appeals[0].appeal_id, "5");
    assert_eq!(transport.last_request().query_value("status"), Some("REJECTED"));
}

#[tokio::test]
async fn resolve_appeal_omits_blank_comment() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"status": "ok"}));
    transport.push_json(200, json!({"status": "ok"}));
    let (api, _) = client_with(&transport, Some("T1"));

    resolve_appeal(&api, "A1", "T42", AppealDecision::Approved, Some("  ")).await.unwrap();
    let req = transport.last_request();
    assert!(req.url.ends_with("/teacher/appeals/A1/resolve"));
    assert_eq!(req.query_value("decision"), Some("APPROVED"));
    assert_eq!(req.query_value("teacher_comment"), None);

    resolve_appeal(&api, "A1", "T42", AppealDecision::Rejected, Some("blurry photo")).await.unwrap();
    assert_eq!(transport.last_request().query_value("teacher_comment"), Some("blurry photo"));
}

#[tokio::test]
async fn student_appeal_data_decodes_analysis() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"max_similarity": 0.93, "ai_score": 61, "ai_confidence": "HIGH"}));
    let (api, _) = client_with(&transport, Some("T1"));

    let analysis = student_appeal_data(&api, "L1", "s1").await.unwrap();
    assert_eq!(analysis.ai_score, Some(61.0));
    let req = transport.last_request();
    assert_eq!(req.query_value("student_id"), Some("s1"));
}
