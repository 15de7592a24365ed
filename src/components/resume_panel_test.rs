use serde_json::json;

use super::*;

fn resume(parsed_data: serde_json::Value) -> ResumeOut {
    serde_json::from_value(json!({
        "id": "r-1",
        "user_id": "u-1",
        "filename": "cv.pdf",
        "parsed_data": parsed_data,
        "uploaded_at": "2026-01-02T00:00:00Z"
    }))
    .unwrap()
}

#[test]
fn size_label_scales_units() {
    assert_eq!(size_label(None), None);
    assert_eq!(size_label(Some(512)).as_deref(), Some("512 B"));
    assert_eq!(size_label(Some(245_760)).as_deref(), Some("240 KB"));
    assert_eq!(size_label(Some(3_145_728)).as_deref(), Some("3.0 MB"));
}

#[test]
fn parsed_means_non_empty_object() {
    assert!(!is_parsed(&resume(serde_json::Value::Null)));
    assert!(!is_parsed(&resume(json!({}))));
    assert!(is_parsed(&resume(json!({ "skills": ["rust"] }))));
}
