use super::*;

// =============================================================================
// from_status
// =============================================================================

#[test]
fn from_status_401_is_unauthorized() {
    let err = ApiError::from_status(401, r#"{"detail":"Invalid token"}"#);
    assert_eq!(err, ApiError::Unauthorized { detail: "Invalid token".to_owned() });
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_404_is_not_found() {
    let err = ApiError::from_status(404, r#"{"detail":"Lecture not found"}"#);
    assert!(err.is_not_found());
}

#[test]
fn from_status_403_is_validation_not_session_end() {
    let err = ApiError::from_status(403, r#"{"detail":"Not your class"}"#);
    assert_eq!(err, ApiError::Validation { status: 403, detail: "Not your class".to_owned() });
    assert!(!err.is_unauthorized());
}

#[test]
fn from_status_5xx_is_server() {
    let err = ApiError::from_status(502, "");
    assert_eq!(err, ApiError::Server { status: 502, detail: "HTTP 502".to_owned() });
}

// =============================================================================
// extract_detail
// =============================================================================

#[test]
fn extract_detail_reads_validation_list() {
    let body = r#"{"detail":[{"loc":["query","user_id"],"msg":"field required"},{"msg":"bad date"}]}"#;
    assert_eq!(extract_detail(body).as_deref(), Some("field required; bad date"));
}

#[test]
fn extract_detail_reads_message_field() {
    assert_eq!(extract_detail(r#"{"message":"boom"}"#).as_deref(), Some("boom"));
}

#[test]
fn extract_detail_accepts_short_plain_text() {
    assert_eq!(extract_detail("Internal Server Error").as_deref(), Some("Internal Server Error"));
}

#[test]
fn extract_detail_ignores_html_pages() {
    assert_eq!(extract_detail("<html><body>502</body></html>"), None);
}

#[test]
fn extract_detail_empty_body_is_none() {
    assert_eq!(extract_detail("  "), None);
    assert_eq!(extract_detail("{}"), None);
}

// =============================================================================
// user_message
// =============================================================================

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"Lecture is locked"}"#);
    assert_eq!(err.user_message("Upload failed"), "Lecture is locked");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::from_status(500, "");
    assert_eq!(err.user_message("Failed to load attendance"), "Failed to load attendance");
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message("Failed"), "Failed");
}

#[test]
fn user_message_unreachable_names_base_url() {
    let err = ApiError::BackendUnreachable {
        base_url: "http://localhost:3000".to_owned(),
        message: "connection refused".to_owned(),
    };
    assert!(err.is_unreachable());
    let msg = err.user_message("Login failed");
    assert!(msg.contains("http://localhost:3000"));
    assert!(msg.contains("backend is running"));
}

#[test]
fn timeout_counts_as_unreachable() {
    let err = ApiError::Timeout { base_url: "http://x".to_owned(), secs: 30 };
    assert!(err.is_unreachable());
    assert!(err.to_string().contains("30s"));
}
