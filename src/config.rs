//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::oauth::GoogleOAuthConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

pub const ENV_API_BASE_URL: &str = "SIGNUP_API_BASE_URL";
pub const ENV_TOKEN_FILE: &str = "SIGNUP_TOKEN_FILE";
pub const ENV_GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const ENV_GOOGLE_REDIRECT_URI: &str = "GOOGLE_REDIRECT_URI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    /// Auth API origin, without trailing slash.
    pub api_base_url: String,
    /// File backing the token store, when one is configured.
    pub token_file: Option<PathBuf>,
    /// `None` disables Google login.
    pub google: Option<GoogleOAuthConfig>,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), token_file: None, google: None }
    }
}

impl SignupConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `SIGNUP_API_BASE_URL`: default `http://localhost:5000`
    /// - `SIGNUP_TOKEN_FILE`: path of the JSON token store
    /// - `GOOGLE_CLIENT_ID` + `GOOGLE_REDIRECT_URI`: both required to enable Google login
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base_url = non_empty(ENV_API_BASE_URL)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let token_file = non_empty(ENV_TOKEN_FILE).map(PathBuf::from);
        let google = match (non_empty(ENV_GOOGLE_CLIENT_ID), non_empty(ENV_GOOGLE_REDIRECT_URI)) {
            (Some(client_id), Some(redirect_uri)) => Some(GoogleOAuthConfig { client_id, redirect_uri }),
            _ => None,
        };

        Self { api_base_url, token_file, google }
    }
}
