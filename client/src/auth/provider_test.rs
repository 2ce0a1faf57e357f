use base64::prelude::*;

use super::*;

fn jwt_for(sub: &str) -> String {
    let header = BASE64_URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = BASE64_URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": sub }).to_string());
    format!("{header}.{body}.signature")
}

/// Provider under a fresh reactive owner; keep the owner alive for the test.
fn provider() -> (Owner, PkceProvider) {
    let owner = Owner::new();
    owner.set();
    (owner, PkceProvider::new(AuthConfig::default()))
}

// =============================================================
// publish
// =============================================================

#[test]
fn starts_without_credentials() {
    let (_owner, provider) = provider();
    assert_eq!(provider.credentials(), Credentials::default());
    assert!(!provider.is_authenticated());
    assert_eq!(provider.last_error(), None);
}

#[test]
fn publish_decodes_jwt_claims() {
    let (_owner, provider) = provider();
    let token = jwt_for("kc-7");
    provider.publish(token.clone());

    let credentials = provider.credentials();
    assert_eq!(credentials.token.as_deref(), Some(token.as_str()));
    assert_eq!(credentials.token_data.map(|c| c.sub).as_deref(), Some("kc-7"));
    assert!(provider.is_authenticated());
}

#[test]
fn publish_of_opaque_token_has_no_claims() {
    let (_owner, provider) = provider();
    provider.publish("opaque-access-token".to_owned());

    let credentials = provider.credentials();
    assert_eq!(credentials.token.as_deref(), Some("opaque-access-token"));
    assert_eq!(credentials.token_data, None);
    assert!(provider.is_authenticated());
}

#[test]
fn publish_clears_previous_login_error() {
    let (_owner, provider) = provider();
    provider.error.set(Some("oauth state mismatch".to_owned()));
    assert_eq!(provider.last_error().as_deref(), Some("oauth state mismatch"));

    provider.publish(jwt_for("kc-7"));
    assert_eq!(provider.last_error(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_drops_credentials() {
    let (_owner, provider) = provider();
    provider.publish(jwt_for("kc-7"));
    provider.logout();

    assert_eq!(provider.credentials(), Credentials::default());
    assert!(!provider.is_authenticated());
}

#[test]
fn logout_is_seen_by_clones() {
    let (_owner, provider) = provider();
    let shared = provider.clone();
    provider.publish(jwt_for("kc-7"));
    assert!(shared.is_authenticated());

    shared.logout();
    assert!(!provider.is_authenticated());
}
