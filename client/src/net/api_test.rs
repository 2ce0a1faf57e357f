use super::*;
use crate::auth::claims::UserClaims;

fn config(base: &str) -> ClientConfig {
    ClientConfig {
        api_base_url: base.to_owned(),
        ..ClientConfig::default()
    }
}

#[test]
fn activities_endpoint_formats_expected_path() {
    assert_eq!(activities_endpoint("http://api.test/api"), "http://api.test/api/activities");
}

#[test]
fn recommendation_endpoint_encodes_activity_id() {
    assert_eq!(
        recommendation_endpoint("http://api.test/api", "a 1/2"),
        "http://api.test/api/recommendations/activity/a%201%2F2"
    );
}

#[test]
fn auth_headers_include_bearer_and_user_id() {
    let headers = auth_headers("tok", Some("user-1"));
    assert_eq!(
        headers,
        vec![
            ("Authorization", "Bearer tok".to_owned()),
            ("X-User-ID", "user-1".to_owned()),
        ]
    );
}

#[test]
fn auth_headers_skip_missing_user_id() {
    let headers = auth_headers("tok", None);
    assert_eq!(headers, vec![("Authorization", "Bearer tok".to_owned())]);
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let api = HttpActivityApi::new("http://api.test/api/", "tok", None);
    assert_eq!(api.base_url(), "http://api.test/api");
}

#[test]
fn for_session_requires_token() {
    assert!(HttpActivityApi::for_session(&config("http://api.test"), &Session::default()).is_none());
}

#[test]
fn for_session_uses_sub_claim_as_user_id() {
    let mut session = Session::default();
    let claims = UserClaims {
        sub: "kc-42".to_owned(),
        ..UserClaims::default()
    };
    session.set_credentials("tok".to_owned(), Some(claims));

    let api = HttpActivityApi::for_session(&config("http://api.test"), &session).unwrap();
    assert_eq!(api.base_url(), "http://api.test");
    assert_eq!(
        api.headers(),
        vec![
            ("Authorization", "Bearer tok".to_owned()),
            ("X-User-ID", "kc-42".to_owned()),
        ]
    );
}

#[test]
fn api_error_not_found_only_for_404() {
    assert!(ApiError::Status(404).is_not_found());
    assert!(!ApiError::Status(500).is_not_found());
    assert!(!ApiError::Network("offline".to_owned()).is_not_found());
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_calls_are_unavailable_off_browser() {
    let api = HttpActivityApi::new("http://api.test", "tok", None);
    let result = futures::executor::block_on(api.list_activities());
    assert_eq!(result, Err(ApiError::Unavailable));
}
