//! Counting `AuthApi` mock shared by unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::api::AuthApi;
use super::types::{AuthResult, GoogleLoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::net::types::ErrorBody;
use crate::session::{SessionError, TokenStore};

pub(crate) fn auth_result(token: &str) -> AuthResult {
    AuthResult { token: token.to_owned(), extra: serde_json::Map::new() }
}

pub(crate) fn server_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Server {
        status,
        body: Some(ErrorBody { message: message.map(str::to_owned), extra: serde_json::Map::new() }),
    }
}

pub(crate) struct MockAuthApi {
    reply: Result<AuthResult, ApiError>,
    pub register_calls: AtomicUsize,
    pub google_calls: AtomicUsize,
    pub last_register: Mutex<Option<RegisterRequest>>,
    pub last_google: Mutex<Option<GoogleLoginRequest>>,
}

impl MockAuthApi {
    pub(crate) fn ok(token: &str) -> Self {
        Self::with_reply(Ok(auth_result(token)))
    }

    pub(crate) fn err(error: ApiError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<AuthResult, ApiError>) -> Self {
        Self {
            reply,
            register_calls: AtomicUsize::new(0),
            google_calls: AtomicUsize::new(0),
            last_register: Mutex::new(None),
            last_google: Mutex::new(None),
        }
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst) + self.google_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AuthApi for MockAuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResult, ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_register.lock().unwrap() = Some(request.clone());
        self.reply.clone()
    }

    async fn google_login(&self, request: &GoogleLoginRequest) -> Result<AuthResult, ApiError> {
        self.google_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_google.lock().unwrap() = Some(request.clone());
        self.reply.clone()
    }
}

/// Token store whose writes always fail.
pub(crate) struct BrokenStore;

impl TokenStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Err(SessionError::Unavailable("disk full".to_owned()))
    }
}
