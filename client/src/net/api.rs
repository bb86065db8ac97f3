//! Browser-side construction of the auth client.
//!
//! The WASM bundle has no process environment, so configuration is captured
//! at compile time with `option_env!` and fed through the same loader the
//! native front-ends use.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use signup::config::{
    ENV_API_BASE_URL, ENV_GOOGLE_CLIENT_ID, ENV_GOOGLE_REDIRECT_URI, SignupConfig,
};
use signup::{ApiError, AuthClient, HttpAuthApi, Session};

use crate::util::storage::LocalStorageTokenStore;

/// Configuration baked into the bundle.
pub fn browser_config() -> SignupConfig {
    SignupConfig::from_lookup(build_time_var)
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_BASE_URL => option_env!("SIGNUP_API_BASE_URL"),
        ENV_GOOGLE_CLIENT_ID => option_env!("GOOGLE_CLIENT_ID"),
        ENV_GOOGLE_REDIRECT_URI => option_env!("GOOGLE_REDIRECT_URI"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Auth client whose session persists into `localStorage`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
pub fn auth_client() -> Result<AuthClient<HttpAuthApi>, ApiError> {
    let config = browser_config();
    let api = HttpAuthApi::new(&config.api_base_url)?;
    Ok(AuthClient::new(api, Session::new(LocalStorageTokenStore)))
}
