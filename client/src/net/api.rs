//! REST client for the external fitness API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError`; callers decide whether to log,
//! surface, or ignore it. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Activity, ActivityDraft, Recommendation};
use crate::config::ClientConfig;
use crate::state::session::Session;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    #[error("not logged in")]
    NotAuthenticated,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

/// Operations the views need from the fitness API.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `POST /activities` with the draft as JSON body.
    async fn create_activity(&self, draft: &ActivityDraft) -> Result<(), ApiError>;

    /// `GET /activities` for the current user.
    async fn list_activities(&self) -> Result<Vec<Activity>, ApiError>;

    /// `GET /recommendations/activity/{id}`.
    async fn activity_recommendation(&self, activity_id: &str) -> Result<Recommendation, ApiError>;
}

/// `ActivityApi` over HTTP, authenticated with the session's bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpActivityApi {
    base_url: String,
    token: String,
    user_id: Option<String>,
}

impl HttpActivityApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
            user_id,
        }
    }

    /// Build a client for the current session, or `None` when logged out.
    pub fn for_session(config: &ClientConfig, session: &Session) -> Option<Self> {
        let token = session.token()?;
        Some(Self::new(
            config.api_base_url.clone(),
            token,
            session.user_id().map(str::to_owned),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request made by this client.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        auth_headers(&self.token, self.user_id.as_deref())
    }

    #[cfg(feature = "hydrate")]
    fn authorized(&self, mut builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        for (name, value) in self.headers() {
            builder = builder.header(name, &value);
        }
        builder
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn activities_endpoint(base_url: &str) -> String {
    format!("{base_url}/activities")
}

#[cfg(any(test, feature = "hydrate"))]
fn recommendation_endpoint(base_url: &str, activity_id: &str) -> String {
    format!("{base_url}/recommendations/activity/{}", urlencoding::encode(activity_id))
}

/// Headers attached to every API request. `X-User-ID` is omitted when the
/// token carried no `sub` claim.
fn auth_headers(token: &str, user_id: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Authorization", format!("Bearer {token}"))];
    if let Some(user_id) = user_id {
        headers.push(("X-User-ID", user_id.to_owned()));
    }
    headers
}

impl ActivityApi for HttpActivityApi {
    async fn create_activity(&self, draft: &ActivityDraft) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = activities_endpoint(&self.base_url);
            let resp = self
                .authorized(gloo_net::http::Request::post(&url))
                .json(draft)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = activities_endpoint(&self.base_url);
            let resp = self
                .authorized(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<Vec<Activity>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn activity_recommendation(&self, activity_id: &str) -> Result<Recommendation, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = recommendation_endpoint(&self.base_url, activity_id);
            let resp = self
                .authorized(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<Recommendation>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = activity_id;
            Err(ApiError::Unavailable)
        }
    }
}
