use super::*;

#[test]
fn status_lines_mark_each_stage() {
    let status = SubmissionStatus {
        submission_id: Some("7".to_owned()),
        ocr_status: Some("DONE".to_owned()),
        ai_status: Some("processing".to_owned()),
        similarity_status: None,
    };
    let lines = status_lines(&status);
    assert_eq!(lines[0], ("OCR", "✅", "DONE".to_owned()));
    assert_eq!(lines[1], ("AI review", "⏳", "processing".to_owned()));
    assert_eq!(lines[2], ("Similarity", "❌", "-".to_owned()));
}
