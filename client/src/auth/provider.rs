//! Browser OAuth2 PKCE credential provider.
//!
//! ARCHITECTURE
//! ============
//! `login()` stores a fresh verifier and state in `sessionStorage` and sends
//! the browser to the authorization endpoint. When the redirect comes back
//! with `?code=`, `initialize()` verifies the state, exchanges the code at the
//! token endpoint, and publishes the access token. A token already in
//! `sessionStorage` is published on load without a round trip.
//!
//! Token refresh is not attempted: an expired token surfaces as API errors
//! until the user logs in again.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::claims::decode_claims;
#[cfg(feature = "hydrate")]
use super::pkce::{AuthError, CallbackParams, TokenResponse, token_request_body, verify_state};
use super::source::{CredentialSource, Credentials, CredentialsCallback};
use crate::config::AuthConfig;
use crate::util::storage;

const TOKEN_KEY: &str = "fitness.auth.token";
#[cfg(feature = "hydrate")]
const VERIFIER_KEY: &str = "fitness.auth.verifier";
#[cfg(feature = "hydrate")]
const STATE_KEY: &str = "fitness.auth.state";

/// Credential source backed by the browser's location and `sessionStorage`.
#[derive(Clone, Debug)]
pub struct PkceProvider {
    config: Arc<AuthConfig>,
    credentials: RwSignal<Credentials>,
    error: RwSignal<Option<String>>,
}

impl PkceProvider {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
            credentials: RwSignal::new(Credentials::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Last login failure, for display on the login prompt. Tracked.
    pub fn last_error(&self) -> Option<String> {
        self.error.try_get().flatten()
    }

    fn publish(&self, token: String) {
        let claims = decode_claims(&token);
        self.error.try_set(None);
        self.credentials.try_set(Credentials::new(token, claims));
    }

    /// Restore a stored token or finish a pending login redirect.
    ///
    /// Must run after hydration; on the server it does nothing.
    pub fn initialize(&self) {
        #[cfg(feature = "hydrate")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            match CallbackParams::from_query(&search) {
                Some(CallbackParams::Code { code, state }) => {
                    clear_callback_query();
                    let provider = self.clone();
                    leptos::task::spawn_local(async move {
                        match provider.complete_login(&code, state.as_deref()).await {
                            Ok(token) => {
                                storage::save(TOKEN_KEY, &token);
                                provider.publish(token);
                            }
                            Err(e) => {
                                leptos::logging::error!("login failed: {e}");
                                provider.error.try_set(Some(e.to_string()));
                            }
                        }
                    });
                    return;
                }
                Some(CallbackParams::Error { error, description }) => {
                    clear_callback_query();
                    let e = AuthError::Authorization(description.unwrap_or(error));
                    leptos::logging::warn!("login rejected: {e}");
                    self.error.try_set(Some(e.to_string()));
                }
                None => {}
            }
        }

        if let Some(token) = storage::load(TOKEN_KEY).filter(|t| !t.is_empty()) {
            self.publish(token);
        }
    }

    #[cfg(feature = "hydrate")]
    async fn complete_login(&self, code: &str, state: Option<&str>) -> Result<String, AuthError> {
        let expected = storage::take(STATE_KEY);
        verify_state(expected.as_deref(), state)?;
        let verifier = storage::take(VERIFIER_KEY).ok_or(AuthError::MissingVerifier)?;

        let body = token_request_body(&self.config, code, &verifier);
        let resp = gloo_net::http::Request::post(&self.config.token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::TokenExchange(format!("status {}", resp.status())));
        }
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
        Ok(token.access_token)
    }
}

/// Drop `?code=...&state=...` from the address bar so a reload does not
/// replay a consumed authorization code.
#[cfg(feature = "hydrate")]
fn clear_callback_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_owned());
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}

impl CredentialSource for PkceProvider {
    fn credentials(&self) -> Credentials {
        self.credentials.try_get_untracked().unwrap_or_default()
    }

    fn on_credentials_changed(&self, callback: CredentialsCallback) {
        let credentials = self.credentials;
        Effect::new(move || {
            if let Some(current) = credentials.try_get() {
                callback(&current);
            }
        });
    }

    fn login(&self) {
        #[cfg(feature = "hydrate")]
        {
            use super::pkce::{PkcePair, authorize_url, generate_state};

            let pkce = PkcePair::generate();
            let state = generate_state();
            storage::save(VERIFIER_KEY, &pkce.verifier);
            storage::save(STATE_KEY, &state);
            let url = authorize_url(&self.config, &pkce, &state);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
    }

    fn logout(&self) {
        storage::remove(TOKEN_KEY);
        self.credentials.try_set(Credentials::default());
    }
}
