use super::*;

#[test]
fn receipt_message_names_submission_when_known() {
    let receipt = UploadReceipt { submission_id: Some("17".to_owned()), ..UploadReceipt::default() };
    assert_eq!(receipt_message(&receipt), "Uploaded. Submission #17 is being processed.");
}

#[test]
fn receipt_message_without_id() {
    assert_eq!(receipt_message(&UploadReceipt::default()), "Uploaded. Your submission is being processed.");
}
