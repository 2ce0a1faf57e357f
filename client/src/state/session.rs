//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route gate reads the session to decide between the login prompt and
//! the authenticated routes; the auth bridge and the logout button are its
//! only writers.
//!
//! DESIGN
//! ======
//! `Session` keeps its fields private so `is_authenticated` can never drift
//! from token presence. `SessionStore` is the injectable write surface: the
//! app uses the reactive `RwSignal<Session>`; a plain `RefCell` works where
//! no reactive owner exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::auth::claims::UserClaims;

/// Authenticated-user state derived from the OAuth access token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserClaims>,
    is_authenticated: bool,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserClaims> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Subject claim of the logged-in user, sent as `X-User-ID`.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.sub.as_str()).filter(|sub| !sub.is_empty())
    }

    /// Replace the whole session with fresh credentials.
    pub fn set_credentials(&mut self, token: String, user: Option<UserClaims>) {
        *self = Self {
            token: Some(token),
            user,
            is_authenticated: true,
        };
    }

    /// Clear token and user together.
    pub fn logout(&mut self) {
        *self = Self::default();
    }
}

/// Write access to the process-wide session.
pub trait SessionStore {
    fn set_credentials(&self, token: String, user: Option<UserClaims>);
    fn logout(&self);
    /// Current session without subscribing to changes.
    fn snapshot(&self) -> Session;
}

impl SessionStore for RwSignal<Session> {
    fn set_credentials(&self, token: String, user: Option<UserClaims>) {
        self.try_update(|s| s.set_credentials(token, user));
    }

    fn logout(&self) {
        self.try_update(Session::logout);
    }

    fn snapshot(&self) -> Session {
        self.try_get_untracked().unwrap_or_default()
    }
}

impl SessionStore for RefCell<Session> {
    fn set_credentials(&self, token: String, user: Option<UserClaims>) {
        self.borrow_mut().set_credentials(token, user);
    }

    fn logout(&self) {
        self.borrow_mut().logout();
    }

    fn snapshot(&self) -> Session {
        self.borrow().clone()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn set_credentials(&self, token: String, user: Option<UserClaims>) {
        (**self).set_credentials(token, user);
    }

    fn logout(&self) {
        (**self).logout();
    }

    fn snapshot(&self) -> Session {
        (**self).snapshot()
    }
}
