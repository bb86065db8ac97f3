//! Google OAuth (authorization-code flow) helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The consent screen itself is Google's. This module only builds the URL
//! that sends the user there and reads the redirect that comes back, which
//! carries either `code` (forwarded to `/api/google-login`) or `error`.
//!
//! TRADE-OFFS
//! ==========
//! The code is never exchanged client-side; the auth server does that. The
//! `state` parameter is a random hex token the front-end keeps and compares
//! on return.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use std::fmt::Write;

use reqwest::Url;

use crate::error::SignupError;

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_SCOPES: &str = "openid email profile";

/// Google OAuth client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub redirect_uri: String,
}

impl GoogleOAuthConfig {
    /// Build the Google consent URL for the authorization-code flow.
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::Config`] if the authorize endpoint cannot be parsed.
    pub fn authorize_url(&self, state: &str) -> Result<String, SignupError> {
        let url = Url::parse_with_params(
            GOOGLE_AUTHORIZE_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", GOOGLE_SCOPES),
                ("access_type", "offline"),
                ("prompt", "consent"),
                ("state", state),
            ],
        )
        .map_err(|e| SignupError::Config(e.to_string()))?;
        Ok(url.into())
    }
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Random 32-byte hex token for the OAuth `state` parameter.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn generate_state() -> String {
    use rand::Rng;

    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Hex `state` token from caller-supplied random bytes (browser Web Crypto).
#[must_use]
pub fn state_from_bytes(bytes: &[u8]) -> String {
    bytes_to_hex(bytes)
}

/// Parameters read from the OAuth redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCallback {
    /// Authorization code; empty when the provider sent none.
    pub code: String,
    pub state: Option<String>,
}

/// Parse a redirect URL (or just its query string) into an [`AuthCallback`].
///
/// # Errors
///
/// Returns [`SignupError::OAuthDenied`] when the provider reported an error
/// and [`SignupError::InvalidCallback`] when the input is not a URL.
pub fn parse_callback(input: &str) -> Result<AuthCallback, SignupError> {
    let input = input.trim();
    let url = if input.contains("://") {
        Url::parse(input)
    } else {
        Url::parse(&format!("http://localhost/?{}", input.trim_start_matches('?')))
    }
    .map_err(|e| SignupError::InvalidCallback(e.to_string()))?;

    let mut code = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(reason) = error {
        return Err(SignupError::OAuthDenied { reason });
    }
    Ok(AuthCallback { code: code.unwrap_or_default(), state })
}

/// Check the returned `state` against the one sent with the authorize URL.
///
/// # Errors
///
/// Returns [`SignupError::InvalidCallback`] when the values differ or the
/// callback carries no state.
pub fn verify_state(callback: &AuthCallback, expected: &str) -> Result<(), SignupError> {
    match callback.state.as_deref() {
        Some(state) if state == expected => Ok(()),
        Some(_) => Err(SignupError::InvalidCallback("oauth state mismatch".to_owned())),
        None => Err(SignupError::InvalidCallback("missing oauth state".to_owned())),
    }
}
