//! OAuth2 authorization-code + PKCE request building.
//!
//! Everything here is pure so the browser provider only has to move strings
//! between `sessionStorage`, `window.location`, and `fetch`.

#[cfg(test)]
#[path = "pkce_test.rs"]
mod pkce_test;

use base64::prelude::*;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;

/// PKCE code verifier and its S256 challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    /// Fresh pair with a 64-char verifier built from two v4 UUIDs.
    pub fn generate() -> Self {
        let verifier = format!(
            "{}{}",
            uuid::Uuid::new_v4().simple(),
            uuid::Uuid::new_v4().simple()
        );
        Self::from_verifier(verifier)
    }

    pub fn from_verifier(verifier: String) -> Self {
        let challenge = s256_challenge(&verifier);
        Self { verifier, challenge }
    }
}

/// `BASE64URL(SHA256(verifier))` without padding.
pub fn s256_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    BASE64_URL_SAFE_NO_PAD.encode(digest)
}

/// Random opaque value tying the callback to the request that started it.
pub fn generate_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Authorization endpoint URL the browser is sent to on login.
pub fn authorize_url(config: &AuthConfig, pkce: &PkcePair, state: &str) -> String {
    let query = encode_pairs(&[
        ("response_type", "code"),
        ("client_id", &config.client_id),
        ("redirect_uri", &config.redirect_uri),
        ("scope", &config.scope),
        ("code_challenge", &pkce.challenge),
        ("code_challenge_method", "S256"),
        ("state", state),
    ]);
    let separator = if config.authorize_url.contains('?') { '&' } else { '?' };
    format!("{}{separator}{query}", config.authorize_url)
}

/// Form-encoded body for the authorization-code token exchange.
pub fn token_request_body(config: &AuthConfig, code: &str, verifier: &str) -> String {
    encode_pairs(&[
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", &config.redirect_uri),
        ("client_id", &config.client_id),
        ("code_verifier", verifier),
    ])
}

/// Query parameters the authorization server appends to the redirect URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackParams {
    Code { code: String, state: Option<String> },
    Error { error: String, description: Option<String> },
}

impl CallbackParams {
    /// Parse `location.search` (with or without the leading `?`).
    ///
    /// Returns `None` when the URL carries neither `code` nor `error`.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut code = None;
        let mut state = None;
        let mut error = None;
        let mut description = None;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(&raw.replace('+', " "))
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_owned());
            match key {
                "code" => code = Some(value),
                "state" => state = Some(value),
                "error" => error = Some(value),
                "error_description" => description = Some(value),
                _ => {}
            }
        }
        if let Some(error) = error {
            return Some(Self::Error { error, description });
        }
        code.filter(|c| !c.is_empty()).map(|code| Self::Code { code, state })
    }
}

/// Successful token endpoint response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Failure while completing the login redirect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("authorization server returned {0}")]
    Authorization(String),
    #[error("oauth state mismatch")]
    StateMismatch,
    #[error("no pending PKCE verifier for this callback")]
    MissingVerifier,
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
}

/// Check the callback `state` against the value stored before redirecting.
///
/// # Errors
///
/// Returns `AuthError::StateMismatch` when either side is missing or they differ.
pub fn verify_state(expected: Option<&str>, received: Option<&str>) -> Result<(), AuthError> {
    match (expected, received) {
        (Some(expected), Some(received)) if !expected.is_empty() && expected == received => Ok(()),
        _ => Err(AuthError::StateMismatch),
    }
}
