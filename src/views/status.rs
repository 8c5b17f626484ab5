//! Status values to CSS classes, labels and icons.
//!
//! Backend status strings are free-form upper-case words. Matching is
//! case-insensitive and anything unrecognized falls to the neutral style.

fn upper(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_ascii_uppercase()
}

/// Pill shown on a student's lecture card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub class: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

#[must_use]
pub fn lecture_badge(status: Option<&str>) -> StatusBadge {
    match upper(status).as_str() {
        "PRESENT" => StatusBadge { class: "status-present", text: "Present", icon: "✅" },
        "ABSENT" => StatusBadge { class: "status-absent", text: "Absent", icon: "❌" },
        _ => StatusBadge { class: "status-pending", text: "Pending", icon: "⏳" },
    }
}

/// Attendance calendar cell class.
#[must_use]
pub fn calendar_cell_class(status: Option<&str>) -> &'static str {
    match upper(status).as_str() {
        "PRESENT" => "status-present",
        "ABSENT" => "status-absent",
        "OD" => "status-od",
        _ => "status-none",
    }
}

/// Report decision column class; empty for unknown values.
#[must_use]
pub fn decision_class(decision: Option<&str>) -> &'static str {
    match upper(decision).as_str() {
        "PRESENT" => "val-present",
        "ABSENT" => "val-absent",
        "OD" => "val-od",
        "PENDING" => "val-pending",
        _ => "",
    }
}

/// Report conceptual-understanding column class; empty for unknown values.
#[must_use]
pub fn understanding_class(understanding: Option<&str>) -> &'static str {
    match upper(understanding).as_str() {
        "HIGH" => "val-high",
        "MEDIUM" => "val-medium",
        "POOR" => "val-poor",
        _ => "",
    }
}

/// Submission pipeline stage icon.
#[must_use]
pub fn processing_icon(status: Option<&str>) -> &'static str {
    match upper(status).as_str() {
        "DONE" | "COMPLETED" => "✅",
        "PENDING" | "PROCESSING" => "⏳",
        _ => "❌",
    }
}

#[must_use]
pub fn similarity_badge(max_similarity: f64) -> &'static str {
    if max_similarity > 0.9 {
        "high"
    } else if max_similarity > 0.4 {
        "medium"
    } else {
        "low"
    }
}

#[must_use]
pub fn ai_score_badge(score: f64) -> &'static str {
    if score > 75.0 {
        "excellent"
    } else if score >= 50.0 {
        "good"
    } else {
        "poor"
    }
}

/// Confidence class; `low` when the backend gave none.
#[must_use]
pub fn confidence_badge(confidence: Option<&str>) -> String {
    match confidence.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => c.to_ascii_lowercase(),
        None => "low".to_owned(),
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
