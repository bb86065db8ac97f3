//! Transport seam for the remote auth API.
//!
//! DESIGN
//! ======
//! `AuthApi` is the async trait the rest of the crate talks to; tests swap in
//! counting mocks. `HttpAuthApi` is the reqwest implementation. Response
//! handling is a pure function (`parse_auth_response`) so status/body rules
//! are testable without a socket.
//!
//! No request timeout is configured here; the transport default applies.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{AuthResult, GoogleLoginRequest, RegisterRequest, parse_error_body};
use crate::error::ApiError;

pub const REGISTER_PATH: &str = "/api/register";
pub const GOOGLE_LOGIN_PATH: &str = "/api/google-login";

/// Remote auth operations. Implementations do not touch the session.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AuthApi {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-2xx status, or a
    /// success body without a `token`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResult, ApiError>;

    /// Exchange a Google authorization code for a session token.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthApi::register`].
    async fn google_login(&self, request: &GoogleLoginRequest) -> Result<AuthResult, ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// reqwest-backed [`AuthApi`] rooted at a configured base URL.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Build a client for `base_url` (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wrap an existing reqwest client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<AuthResult, ApiError> {
        let url = endpoint(&self.base_url, path);
        tracing::debug!(%url, "auth request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        parse_auth_response(status, &text)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResult, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    async fn google_login(&self, request: &GoogleLoginRequest) -> Result<AuthResult, ApiError> {
        self.post_json(GOOGLE_LOGIN_PATH, request).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Map a status + body pair onto the auth result or a typed error.
fn parse_auth_response(status: u16, text: &str) -> Result<AuthResult, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Server { status, body: parse_error_body(text) });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}
