//! # signup
//!
//! Core of the sign-up client: password policy, reducer-managed form state,
//! the remote auth client, and the session context that owns the stored token.
//!
//! Front-ends (`signup-cli`, the Leptos `signup-client`) drive everything
//! through [`flow`], which applies the local validation gates before any
//! network call and folds settled results back into [`state::SignupState`].

pub mod config;
pub mod error;
pub mod flow;
pub mod net;
pub mod oauth;
pub mod password;
pub mod session;
pub mod state;

pub use config::SignupConfig;
pub use error::{ApiError, SignupError};
pub use net::api::{AuthApi, HttpAuthApi};
pub use net::client::AuthClient;
pub use session::{FileTokenStore, MemoryTokenStore, Session, TOKEN_KEY, TokenStore};
pub use state::{Action, SignupState};
