//! Decoded access-token claims (`tokenData`).

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::prelude::*;
use serde::{Deserialize, Serialize};

/// Identity claims carried by the access token.
///
/// Only `sub` is required by the API; the rest are display hints. Unknown
/// claims are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserClaims {
    /// Best available name for the session bar.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.preferred_username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Returns `None` for opaque tokens or malformed payloads.
pub fn decode_claims(token: &str) -> Option<UserClaims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }
    let bytes = BASE64_URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
