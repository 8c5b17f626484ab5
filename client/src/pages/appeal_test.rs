use super::*;
use portal::ApiError;

#[test]
fn build_request_accepts_calendar_label_as_subject() {
    let req = build_request("u1".to_owned(), "2024-01-02", "3", "CS101 - Intro", "  was present  ").unwrap();
    assert_eq!(req.subject_code, "CS101");
    assert_eq!(req.hour_slot, 3);
    assert_eq!(req.reason, "was present");
}

#[test]
fn build_request_rejects_out_of_range_slot() {
    assert_eq!(
        build_request("u1".to_owned(), "2024-01-02", "6", "CS101", "r").unwrap_err(),
        "Pick an hour slot."
    );
    assert_eq!(
        build_request("u1".to_owned(), "2024-01-02", "", "CS101", "r").unwrap_err(),
        "Pick an hour slot."
    );
}

#[test]
fn build_request_requires_reason() {
    assert_eq!(
        build_request("u1".to_owned(), "2024-01-02", "1", "CS101", "   ").unwrap_err(),
        "Explain why the record is wrong."
    );
}

#[test]
fn pipeline_message_names_failed_step() {
    let err = PipelineError {
        step: "resolve_lecture",
        source: ApiError::NotFound { detail: "No lecture found".to_owned() },
    };
    assert_eq!(pipeline_message(&err), "Could not resolve lecture instance details. No lecture found");
}
