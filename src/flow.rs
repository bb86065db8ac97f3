//! Submit-time orchestration shared by every front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `prepare_*` gates run before anything leaves the process. When a gate
//! fails no network call is issued; a weak password dispatches nothing (the
//! front-end shows the error beside the field), while an empty OAuth code
//! lands in the feedback line. The `submit_*` functions then drive the
//! pending -> settled lifecycle against a `SignupState` the caller owns.
//!
//! Front-ends that cannot hold `&mut SignupState` across an await (reactive
//! signals) call the `prepare_*` gates and dispatch the lifecycle actions
//! themselves, in the same order.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::error::SignupError;
use crate::net::api::AuthApi;
use crate::net::client::AuthClient;
use crate::net::types::{AuthResult, RegisterRequest};
use crate::oauth::{parse_callback, verify_state};
use crate::password::check_password;
use crate::state::form::FormState;
use crate::state::signup::{Action, GOOGLE_LOGIN_FAILED, SignupState};

/// Validate the form for registration and build the request payload.
///
/// # Errors
///
/// Returns [`SignupError::WeakPassword`] when the password policy fails.
pub fn prepare_registration(form: &FormState) -> Result<RegisterRequest, SignupError> {
    check_password(&form.password)?;
    Ok(form.register_request())
}

/// Reject an empty authorization code before it reaches the server.
///
/// # Errors
///
/// Returns [`SignupError::EmptyAuthCode`] for an empty or blank code.
pub fn prepare_google_login(code: &str) -> Result<&str, SignupError> {
    if code.trim().is_empty() {
        return Err(SignupError::EmptyAuthCode);
    }
    Ok(code)
}

/// Validate, register, and fold the result into `state`.
///
/// # Errors
///
/// Returns the local [`SignupError::WeakPassword`] without dispatching, or
/// [`SignupError::Remote`] after the rejection has been dispatched.
pub async fn submit_registration<A: AuthApi>(
    state: &mut SignupState,
    client: &AuthClient<A>,
) -> Result<AuthResult, SignupError> {
    let request = prepare_registration(&state.form)?;

    state.dispatch(Action::RegisterPending);
    let result = client.register(&request).await;
    state.dispatch(Action::register_settled(&result));
    Ok(result?)
}

/// Parse and check the OAuth redirect, returning the authorization code.
///
/// # Errors
///
/// Returns [`SignupError::OAuthDenied`], [`SignupError::InvalidCallback`] or
/// [`SignupError::EmptyAuthCode`].
pub fn prepare_google_callback(callback_url: &str, expected_state: Option<&str>) -> Result<String, SignupError> {
    let callback = parse_callback(callback_url)?;
    if let Some(expected) = expected_state {
        verify_state(&callback, expected)?;
    }
    prepare_google_login(&callback.code)?;
    Ok(callback.code)
}

/// Feedback line for a google-login attempt that ended before the network.
#[must_use]
pub fn google_local_failure_message(err: &SignupError) -> String {
    match err {
        SignupError::EmptyAuthCode => err.to_string(),
        _ => GOOGLE_LOGIN_FAILED.to_owned(),
    }
}

/// Forward an authorization code to the google-login operation.
///
/// # Errors
///
/// Returns [`SignupError::EmptyAuthCode`] (feedback already set) or
/// [`SignupError::Remote`] after the rejection has been dispatched.
pub async fn submit_google_code<A: AuthApi>(
    state: &mut SignupState,
    client: &AuthClient<A>,
    code: &str,
) -> Result<AuthResult, SignupError> {
    match prepare_google_login(code) {
        Ok(code) => google_login(state, client, code).await,
        Err(e) => Err(fail_google_locally(state, e)),
    }
}

/// Handle the OAuth redirect URL: provider errors and state mismatches end
/// locally with the generic failure message; otherwise the code is submitted.
///
/// # Errors
///
/// Returns the local callback error or the remote rejection.
pub async fn complete_google_callback<A: AuthApi>(
    state: &mut SignupState,
    client: &AuthClient<A>,
    callback_url: &str,
    expected_state: Option<&str>,
) -> Result<AuthResult, SignupError> {
    match prepare_google_callback(callback_url, expected_state) {
        Ok(code) => google_login(state, client, &code).await,
        Err(e) => Err(fail_google_locally(state, e)),
    }
}

async fn google_login<A: AuthApi>(
    state: &mut SignupState,
    client: &AuthClient<A>,
    code: &str,
) -> Result<AuthResult, SignupError> {
    state.dispatch(Action::GoogleLoginPending);
    let result = client.google_login(code).await;
    state.dispatch(Action::google_login_settled(&result));
    Ok(result?)
}

fn fail_google_locally(state: &mut SignupState, err: SignupError) -> SignupError {
    tracing::warn!(error = ?err, "google login stopped before contacting the server");
    state.dispatch(Action::SetFeedbackMessage(google_local_failure_message(&err)));
    err
}
