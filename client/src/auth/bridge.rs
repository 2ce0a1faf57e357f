//! Synchronizes provider credentials into the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential provider owns the token; the rest of the app reads the
//! session store. The bridge is the only path between the two.
//!
//! DESIGN
//! ======
//! Synchronization is level-triggered: every delivery carrying a non-empty
//! token writes it to the store, and identical deliveries are skipped so
//! store subscribers are not woken for nothing. A delivery without a token
//! after one was observed clears the session, keeping the store in step with
//! the most recently observed token. User-initiated logout goes to the store
//! directly and never through here.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::cell::Cell;
use std::rc::Rc;

use super::source::{CredentialSource, Credentials};
use crate::state::session::SessionStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BridgeState {
    #[default]
    NoToken,
    TokenObserved,
}

pub struct AuthBridge<S> {
    store: S,
    state: Cell<BridgeState>,
}

impl<S: SessionStore> AuthBridge<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Cell::new(BridgeState::NoToken),
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state.get()
    }

    /// True once a token has been forwarded to the store.
    pub fn auth_ready(&self) -> bool {
        self.state.get() == BridgeState::TokenObserved
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one credentials delivery from the provider.
    pub fn observe(&self, credentials: &Credentials) {
        if let Some(token) = credentials.present_token() {
            let current = self.store.snapshot();
            let unchanged = current.token() == Some(token) && current.user() == credentials.token_data.as_ref();
            if !unchanged {
                self.store
                    .set_credentials(token.to_owned(), credentials.token_data.clone());
            }
            if self.state.replace(BridgeState::TokenObserved) == BridgeState::NoToken {
                leptos::logging::log!("auth: session established");
            }
        } else if self.state.get() == BridgeState::TokenObserved {
            self.store.logout();
            self.state.set(BridgeState::NoToken);
            leptos::logging::log!("auth: provider token cleared");
        }
    }
}

impl<S: SessionStore + 'static> AuthBridge<S> {
    /// Sync the provider's current credentials, then follow its changes.
    pub fn attach<C: CredentialSource + ?Sized>(bridge: &Rc<Self>, source: &C) {
        bridge.observe(&source.credentials());
        let bridge = Rc::clone(bridge);
        source.on_credentials_changed(Box::new(move |credentials| bridge.observe(credentials)));
    }
}
