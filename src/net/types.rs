//! Wire DTOs for `/api/register` and `/api/google-login`.
//!
//! DESIGN
//! ======
//! Server-defined extras on success and error bodies are kept in flattened
//! JSON maps so nothing the server sends is silently dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Body of `POST /api/google-login`.
///
/// The server reads the OAuth authorization code from a field named `token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

impl GoogleLoginRequest {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self { token: code.to_owned() }
    }
}

/// Successful auth response: a session token plus whatever else the server returns.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Debug for AuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResult")
            .field("token", &"<redacted>")
            .field("extra", &self.extra)
            .finish()
    }
}

/// Error body returned by the server on a non-success status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason, shown to the user verbatim when present.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parse an error response body; non-JSON or non-object bodies count as absent.
#[must_use]
pub fn parse_error_body(text: &str) -> Option<ErrorBody> {
    serde_json::from_str::<ErrorBody>(text).ok()
}
