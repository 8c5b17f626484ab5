use super::*;
use crate::http::Body;
use crate::test_support::{MockTransport, client_with};

#[tokio::test]
async fn chat_posts_json_and_returns_reply() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({"reply": "Attendance is 82% this week."}));
    let (api, _) = client_with(&transport, Some("T1"));

    let reply = teacher_chat(&api, "T42", " how is attendance? ").await.unwrap();
    assert_eq!(reply.reply, "Attendance is 82% this week.");

    let req = transport.last_request();
    assert!(req.url.ends_with("/teacher/chat"));
    assert_eq!(req.body, Body::Json(json!({"teacher_id": "T42", "message": "how is attendance?"})));
}

#[tokio::test]
async fn blank_message_is_not_sent() {
    let transport = MockTransport::new();
    let (api, _) = client_with(&transport, Some("T1"));

    assert!(teacher_chat(&api, "T42", "  ").await.is_err());
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn chat_log_starts_with_greeting() {
    let log = ChatLog::default();
    assert_eq!(log.messages().len(), 1);
    assert_eq!(log.messages()[0].speaker, Speaker::Assistant);
    assert_eq!(log.messages()[0].content, GREETING);
}

#[test]
fn chat_log_renders_error_with_server_detail() {
    let mut log = ChatLog::default();
    log.push_user("hi");
    log.push_result(Err(ApiError::Server { status: 500, detail: "model overloaded".to_owned() }));
    let last = log.messages().last().unwrap();
    assert_eq!(last.content, "Sorry, I encountered an error: model overloaded");
}
