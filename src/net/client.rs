//! Remote client: auth transport plus session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both operations write the returned token into the session before handing
//! the result back, so a caller that sees `Ok` can rely on the token being
//! stored. A token that cannot be stored turns the call into an error.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::api::AuthApi;
use super::types::{AuthResult, GoogleLoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::session::Session;

/// [`AuthApi`] bound to the [`Session`] that receives issued tokens.
#[derive(Debug, Clone)]
pub struct AuthClient<A> {
    api: A,
    session: Session,
}

impl<A: AuthApi> AuthClient<A> {
    #[must_use]
    pub fn new(api: A, session: Session) -> Self {
        Self { api, session }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `POST /api/register` and persist the issued token.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`ApiError`], or [`ApiError::Session`] when the
    /// token cannot be stored.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResult, ApiError> {
        let result = self.api.register(request).await.inspect_err(|e| {
            tracing::warn!(status = ?e.status(), error = %e, "registration rejected");
        })?;
        self.persist(&result)?;
        tracing::info!(email = %request.email, "registration succeeded");
        Ok(result)
    }

    /// `POST /api/google-login` with the authorization code and persist the issued token.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::register`].
    pub async fn google_login(&self, code: &str) -> Result<AuthResult, ApiError> {
        let request = GoogleLoginRequest::from_code(code);
        let result = self.api.google_login(&request).await.inspect_err(|e| {
            tracing::warn!(status = ?e.status(), error = %e, "google login rejected");
        })?;
        self.persist(&result)?;
        tracing::info!("google login succeeded");
        Ok(result)
    }

    fn persist(&self, result: &AuthResult) -> Result<(), ApiError> {
        self.session.persist_token(&result.token).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist session token");
            ApiError::Session(e.to_string())
        })
    }
}
