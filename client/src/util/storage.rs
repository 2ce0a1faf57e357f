//! Browser `sessionStorage` helpers for auth material.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens and in-flight PKCE values live for the tab's lifetime only. These
//! helpers centralize the hydrate-only web-sys glue; on the server every read
//! is `None` and every write is a no-op.

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read the string stored under `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        session_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, ignoring quota or privacy-mode failures.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Read and delete `key` in one step; used for single-use PKCE values.
pub fn take(key: &str) -> Option<String> {
    let value = load(key);
    remove(key);
    value
}
