use super::*;

#[test]
fn lecture_badge_defaults_to_pending() {
    assert_eq!(lecture_badge(Some("PRESENT")).text, "Present");
    assert_eq!(lecture_badge(Some("absent")).class, "status-absent");
    assert_eq!(lecture_badge(None), lecture_badge(Some("PENDING")));
    assert_eq!(lecture_badge(Some("OD")).text, "Pending");
}

#[test]
fn calendar_classes() {
    assert_eq!(calendar_cell_class(Some("PRESENT")), "status-present");
    assert_eq!(calendar_cell_class(Some("OD")), "status-od");
    assert_eq!(calendar_cell_class(Some("PENDING")), "status-none");
    assert_eq!(calendar_cell_class(None), "status-none");
}

#[test]
fn report_classes_are_case_insensitive() {
    assert_eq!(decision_class(Some("od")), "val-od");
    assert_eq!(decision_class(Some("LATE")), "");
    assert_eq!(understanding_class(Some("Medium")), "val-medium");
    assert_eq!(understanding_class(None), "");
}

#[test]
fn processing_icons() {
    assert_eq!(processing_icon(Some("completed")), "✅");
    assert_eq!(processing_icon(Some("processing")), "⏳");
    assert_eq!(processing_icon(Some("failed")), "❌");
    assert_eq!(processing_icon(None), "❌");
}

#[test]
fn analysis_badge_thresholds() {
    assert_eq!(similarity_badge(0.95), "high");
    assert_eq!(similarity_badge(0.9), "medium");
    assert_eq!(similarity_badge(0.4), "low");
    assert_eq!(ai_score_badge(76.0), "excellent");
    assert_eq!(ai_score_badge(75.0), "good");
    assert_eq!(ai_score_badge(50.0), "good");
    assert_eq!(ai_score_badge(49.9), "poor");
    assert_eq!(confidence_badge(Some("HIGH")), "high");
    assert_eq!(confidence_badge(None), "low");
}
