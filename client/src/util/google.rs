//! Google OAuth redirect handling in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `begin` sends the tab to Google's consent screen with a fresh `state`;
//! the callback page hands the returned URL to `complete`, which checks the
//! `state` and runs the google-login lifecycle against the shared store.

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

use leptos::prelude::*;
use signup::flow::prepare_google_callback;
#[cfg(feature = "hydrate")]
use signup::Action;
use signup::{SignupError, SignupState};

/// Authorization code from a callback URL, checked against the saved state.
///
/// A missing saved state fails closed: the redirect did not start here.
///
/// # Errors
///
/// Returns [`SignupError::InvalidCallback`] without a saved state, otherwise
/// whatever [`prepare_google_callback`] rejects.
pub fn callback_code(href: &str, saved_state: Option<&str>) -> Result<String, SignupError> {
    let expected = saved_state
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SignupError::InvalidCallback("no oauth state was saved for this tab".to_owned()))?;
    prepare_google_callback(href, Some(expected))
}

/// Redirect the tab to the Google consent screen.
///
/// # Errors
///
/// Returns a display string when Google login is unconfigured or the
/// browser APIs are missing.
pub fn begin() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let google = crate::net::api::browser_config().google.ok_or_else(|| SignupError::GoogleNotConfigured.to_string())?;
        let state = random_state().ok_or("crypto.getRandomValues unavailable")?;
        crate::util::storage::save_oauth_state(&state).map_err(|e| e.to_string())?;
        let url = google.authorize_url(&state).map_err(|e| e.to_string())?;
        let window = web_sys::window().ok_or("no window")?;
        window.location().set_href(&url).map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("google login redirects only run in the browser".to_owned())
    }
}

/// Finish the redirect: validate the URL, then exchange the code.
pub fn complete(store: RwSignal<SignupState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) else {
            return;
        };
        let saved = crate::util::storage::take_oauth_state();
        let code = match callback_code(&href, saved.as_deref()) {
            Ok(code) => code,
            Err(e) => {
                log::warn!("google callback rejected: {e}");
                let message = signup::flow::google_local_failure_message(&e);
                store.update(|s| s.dispatch(Action::SetFeedbackMessage(message)));
                return;
            }
        };

        store.update(|s| s.dispatch(Action::GoogleLoginPending));
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::auth_client() {
                Ok(client) => client.google_login(&code).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::warn!("google login failed: {e}");
            }
            store.update(|s| s.dispatch(Action::google_login_settled(&result)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}

#[cfg(feature = "hydrate")]
fn random_state() -> Option<String> {
    let crypto = web_sys::window()?.crypto().ok()?;
    let mut bytes = [0u8; 32];
    crypto.get_random_values_with_u8_array(&mut bytes).ok()?;
    Some(signup::oauth::state_from_bytes(&bytes))
}
