//! Web Storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token goes to `localStorage` so it outlives the tab. The OAuth
//! `state` round-trips through `sessionStorage` and is consumed on read.
//! Outside the browser every operation reports the store as unavailable.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "storage_test.rs"]
mod storage_test;

use signup::session::{SessionError, TokenStore};

/// `sessionStorage` key holding the pending OAuth `state`.
pub const OAUTH_STATE_KEY: &str = "oauth_state";

/// [`TokenStore`] backed by `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }
}

/// Remember the `state` sent with the consent redirect.
///
/// # Errors
///
/// Returns [`SessionError::Unavailable`] when `sessionStorage` is missing.
pub fn save_oauth_state(state: &str) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        session_storage()?.set_item(OAUTH_STATE_KEY, state).map_err(js_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        Err(unavailable())
    }
}

/// Read and forget the pending OAuth `state`.
pub fn take_oauth_state() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = session_storage().ok()?;
        let state = storage.get_item(OAUTH_STATE_KEY).ok().flatten()?;
        if let Err(e) = storage.remove_item(OAUTH_STATE_KEY) {
            log::warn!("failed to clear oauth state: {e:?}");
        }
        Some(state)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::Unavailable("window.localStorage".to_owned()))
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| SessionError::Unavailable("window.sessionStorage".to_owned()))
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> SessionError {
    SessionError::Unavailable(format!("{err:?}"))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> SessionError {
    SessionError::Unavailable("web storage is only available in the browser".to_owned())
}
