//! Error taxonomy for the sign-up flow.
//!
//! ERROR HANDLING
//! ==============
//! Local validation failures (`SignupError`) never touch the network and
//! display as the exact text shown to the user. Remote failures (`ApiError`)
//! are caught at the async-operation boundary and normalized into a feedback
//! message, so front-ends only ever render strings.

use crate::net::types::ErrorBody;

/// Failures raised before or around a remote call.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    /// Password is `Weak` or denylisted.
    #[error("Please choose a stronger and unique password.")]
    WeakPassword,

    /// The OAuth callback carried no authorization code.
    #[error("Google login failed: Empty authorization code received.")]
    EmptyAuthCode,

    /// The OAuth provider reported an error (popup closed, consent denied).
    #[error("Google login failed!")]
    OAuthDenied { reason: String },

    /// The OAuth callback URL or query could not be parsed.
    #[error("invalid OAuth callback: {0}")]
    InvalidCallback(String),

    /// Google login was requested but no client id / redirect URI is configured.
    #[error("Google login is not configured")]
    GoogleNotConfigured,

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The remote auth API rejected the request or could not be reached.
    #[error(transparent)]
    Remote(#[from] ApiError),
}

/// Failures from the remote auth API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Server { status: u16, body: Option<ErrorBody> },

    /// A success response did not match the expected `{ token, .. }` shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The token could not be written to the session store.
    #[error("token store failed: {0}")]
    Session(String),
}

impl ApiError {
    /// Server-supplied `message`, when the error body carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { body: Some(body), .. } => body.message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// HTTP status for server rejections.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
