use super::*;

// =============================================================
// ActivityType
// =============================================================

#[test]
fn activity_type_default_is_running() {
    assert_eq!(ActivityType::default(), ActivityType::Running);
}

#[test]
fn activity_type_parse_accepts_wire_values_only() {
    assert_eq!(ActivityType::parse("WALKING"), Some(ActivityType::Walking));
    assert_eq!(ActivityType::parse("CYCLING"), Some(ActivityType::Cycling));
    assert_eq!(ActivityType::parse("walking"), None);
    assert_eq!(ActivityType::parse("SWIMMING"), None);
}

#[test]
fn activity_type_serializes_screaming_case() {
    let json = serde_json::to_value(ActivityType::Cycling).unwrap();
    assert_eq!(json, serde_json::json!("CYCLING"));
}

// =============================================================
// ActivityDraft
// =============================================================

#[test]
fn draft_default_matches_empty_form() {
    let draft = ActivityDraft::default();
    assert_eq!(draft.kind, ActivityType::Running);
    assert!(draft.duration.is_empty());
    assert!(draft.calories_burned.is_empty());
    assert!(draft.additional_metrics.is_empty());
}

#[test]
fn draft_serializes_api_field_names() {
    let draft = ActivityDraft {
        kind: ActivityType::Walking,
        duration: "45".to_owned(),
        calories_burned: "180".to_owned(),
        additional_metrics: serde_json::Map::new(),
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "WALKING",
            "duration": "45",
            "caloriesBurned": "180",
            "additionalMetrics": {}
        })
    );
}

// =============================================================
// Activity / Recommendation
// =============================================================

#[test]
fn activity_deserializes_with_missing_optional_fields() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "id": "a-1",
        "type": "RUNNING",
        "duration": 30,
        "caloriesBurned": 250
    }))
    .unwrap();
    assert_eq!(activity.id, "a-1");
    assert_eq!(activity.kind, ActivityType::Running);
    assert_eq!(activity.duration, Some(30));
    assert_eq!(activity.calories_burned, Some(250));
    assert!(activity.user_id.is_none());
    assert!(activity.start_time.is_none());
}

#[test]
fn recommendation_tolerates_partial_payload() {
    let rec: Recommendation = serde_json::from_value(serde_json::json!({
        "activityId": "a-1",
        "recommendation": "Solid pace.",
        "improvements": ["Warm up longer"]
    }))
    .unwrap();
    assert_eq!(rec.activity_id.as_deref(), Some("a-1"));
    assert_eq!(rec.recommendation, "Solid pace.");
    assert_eq!(rec.improvements, vec!["Warm up longer".to_owned()]);
    assert!(rec.suggestions.is_empty());
    assert!(rec.safety.is_empty());
}
