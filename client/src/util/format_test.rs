use super::*;

#[test]
fn duration_label_formats_minutes() {
    assert_eq!(duration_label(Some(45)), "45 min");
    assert_eq!(duration_label(None), "-");
}

#[test]
fn calories_label_formats_kcal() {
    assert_eq!(calories_label(Some(320)), "320 kcal");
    assert_eq!(calories_label(None), "-");
}

#[test]
fn timestamp_label_trims_seconds_and_zone() {
    assert_eq!(timestamp_label(Some("2024-05-01T07:30:12.123")), "2024-05-01 07:30");
    assert_eq!(timestamp_label(Some("2024-05-01T07:30:12Z")), "2024-05-01 07:30");
}

#[test]
fn timestamp_label_passes_through_unknown_formats() {
    assert_eq!(timestamp_label(Some("yesterday")), "yesterday");
    assert_eq!(timestamp_label(Some("")), "-");
    assert_eq!(timestamp_label(None), "-");
}
