use super::*;
use crate::net::types::ActivityType;

fn activity(id: &str) -> Activity {
    Activity {
        id: id.to_owned(),
        user_id: None,
        kind: ActivityType::Running,
        duration: Some(30),
        calories_burned: Some(250),
        start_time: None,
        additional_metrics: serde_json::Map::new(),
        created_at: None,
    }
}

#[test]
fn activities_state_defaults() {
    let s = ActivitiesState::default();
    assert!(s.items.is_empty());
    assert_eq!(s.revision, 0);
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn mark_changed_bumps_revision() {
    let mut s = ActivitiesState::default();
    s.mark_changed();
    s.mark_changed();
    assert_eq!(s.revision, 2);
}

#[test]
fn mark_changed_wraps_instead_of_overflowing() {
    let mut s = ActivitiesState {
        revision: u64::MAX,
        ..ActivitiesState::default()
    };
    s.mark_changed();
    assert_eq!(s.revision, 0);
}

#[test]
fn finish_load_replaces_items() {
    let mut s = ActivitiesState::default();
    s.begin_load();
    assert!(s.loading);
    s.finish_load(Ok(vec![activity("a"), activity("b")]));
    assert!(!s.loading);
    assert_eq!(s.items.len(), 2);
    assert!(s.error.is_none());
}

#[test]
fn finish_load_error_keeps_previous_items() {
    let mut s = ActivitiesState::default();
    s.finish_load(Ok(vec![activity("a")]));
    s.begin_load();
    s.finish_load(Err(ApiError::Status(502)));
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("request failed with status 502"));
}

#[test]
fn find_looks_up_by_id() {
    let mut s = ActivitiesState::default();
    s.finish_load(Ok(vec![activity("a"), activity("b")]));
    assert_eq!(s.find("b").map(|a| a.id.as_str()), Some("b"));
    assert!(s.find("zzz").is_none());
}
