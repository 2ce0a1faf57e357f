//! Route gate: which view a path resolves to for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route (and the router fallback) renders through the same gate so
//! unauthenticated users only ever see the login prompt, whatever the path.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::session::Session;

pub const ACTIVITIES_PATH: &str = "/activities";

/// Detail path for an activity id, percent-encoded as one path segment.
pub fn activity_path(id: &str) -> String {
    format!("{ACTIVITIES_PATH}/{}", urlencoding::encode(id))
}

/// View selected for a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Login,
    Activities,
    ActivityDetail { id: String },
    Redirect { to: &'static str },
    NotFound,
}

/// True when the login prompt replaces every route.
pub fn should_show_login(session: &Session) -> bool {
    session.token().is_none()
}

/// Resolve `path` against the session.
///
/// Trailing slashes are ignored, so `/activities/` is `/activities`.
pub fn decide(session: &Session, path: &str) -> RouteDecision {
    if should_show_login(session) {
        return RouteDecision::Login;
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return RouteDecision::Redirect { to: ACTIVITIES_PATH };
    }
    if trimmed == ACTIVITIES_PATH {
        return RouteDecision::Activities;
    }
    match trimmed.strip_prefix(ACTIVITIES_PATH).and_then(|rest| rest.strip_prefix('/')) {
        Some(segment) if !segment.is_empty() && !segment.contains('/') => match urlencoding::decode(segment) {
            Ok(id) => RouteDecision::ActivityDetail { id: id.into_owned() },
            Err(_) => RouteDecision::NotFound,
        },
        _ => RouteDecision::NotFound,
    }
}
