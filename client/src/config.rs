//! Client configuration baked in at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so endpoints are read with
//! `option_env!` when the crate is built. Unset or blank values fall back to
//! the local development deployment (API gateway on `:8080`, Keycloak realm
//! `fitness-oauth2` on `:8181`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_AUTH_CLIENT_ID: &str = "oauth2-pkce-client";
pub const DEFAULT_AUTH_AUTHORIZE_URL: &str =
    "http://localhost:8181/realms/fitness-oauth2/protocol/openid-connect/auth";
pub const DEFAULT_AUTH_TOKEN_URL: &str = "http://localhost:8181/realms/fitness-oauth2/protocol/openid-connect/token";
pub const DEFAULT_AUTH_REDIRECT_URI: &str = "http://localhost:3000";
pub const DEFAULT_AUTH_SCOPE: &str = "openid profile email offline_access";

/// OAuth2 authorization-code + PKCE client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub client_id: String,
    pub authorize_url: String,
    pub token_url: String,
    pub redirect_uri: String,
    pub scope: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_AUTH_CLIENT_ID.to_owned(),
            authorize_url: DEFAULT_AUTH_AUTHORIZE_URL.to_owned(),
            token_url: DEFAULT_AUTH_TOKEN_URL.to_owned(),
            redirect_uri: DEFAULT_AUTH_REDIRECT_URI.to_owned(),
            scope: DEFAULT_AUTH_SCOPE.to_owned(),
        }
    }
}

/// Everything the views need to reach the API and the authorization server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            auth: AuthConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from the variables present when the crate was compiled.
    ///
    /// Optional:
    /// - `FITNESS_API_BASE_URL`
    /// - `FITNESS_AUTH_CLIENT_ID`
    /// - `FITNESS_AUTH_AUTHORIZE_URL`
    /// - `FITNESS_AUTH_TOKEN_URL`
    /// - `FITNESS_AUTH_REDIRECT_URI`
    /// - `FITNESS_AUTH_SCOPE`
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| build_env(key).map(str::to_owned))
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        let url = |key: &str, default: &str| value(key, default).trim_end_matches('/').to_owned();

        Self {
            api_base_url: url("FITNESS_API_BASE_URL", DEFAULT_API_BASE_URL),
            auth: AuthConfig {
                client_id: value("FITNESS_AUTH_CLIENT_ID", DEFAULT_AUTH_CLIENT_ID),
                authorize_url: url("FITNESS_AUTH_AUTHORIZE_URL", DEFAULT_AUTH_AUTHORIZE_URL),
                token_url: url("FITNESS_AUTH_TOKEN_URL", DEFAULT_AUTH_TOKEN_URL),
                redirect_uri: value("FITNESS_AUTH_REDIRECT_URI", DEFAULT_AUTH_REDIRECT_URI),
                scope: value("FITNESS_AUTH_SCOPE", DEFAULT_AUTH_SCOPE),
            },
        }
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "FITNESS_API_BASE_URL" => option_env!("FITNESS_API_BASE_URL"),
        "FITNESS_AUTH_CLIENT_ID" => option_env!("FITNESS_AUTH_CLIENT_ID"),
        "FITNESS_AUTH_AUTHORIZE_URL" => option_env!("FITNESS_AUTH_AUTHORIZE_URL"),
        "FITNESS_AUTH_TOKEN_URL" => option_env!("FITNESS_AUTH_TOKEN_URL"),
        "FITNESS_AUTH_REDIRECT_URI" => option_env!("FITNESS_AUTH_REDIRECT_URI"),
        "FITNESS_AUTH_SCOPE" => option_env!("FITNESS_AUTH_SCOPE"),
        _ => None,
    }
}
