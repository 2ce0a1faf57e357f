//! Authentication: credential provider, token claims, and the bridge into
//! the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data flows one way: `provider` (browser PKCE flow) → `bridge` →
//! `state::session`. Views read the session, never the provider, except to
//! start login or discard the provider token on logout.

pub mod bridge;
pub mod claims;
pub mod pkce;
pub mod provider;
pub mod source;
