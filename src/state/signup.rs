//! Reducer for the sign-up form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front-ends never assign fields directly; they build an [`Action`] and call
//! [`SignupState::dispatch`]. Async operations report through their
//! `*Pending` and `*Settled` actions, so the feedback message and the
//! lifecycle state always move together.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::form::FormState;
use super::lifecycle::OpStatus;
use crate::error::ApiError;
use crate::net::types::AuthResult;

pub const REGISTER_SUCCESS: &str = "Registration successful!";
pub const REGISTER_FAILED: &str = "Registration failed!";
pub const GOOGLE_LOGIN_SUCCESS: &str = "Google login successful!";
pub const GOOGLE_LOGIN_FAILED: &str = "Google login failed!";

/// Every mutation the form state accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    SetRememberMe(bool),
    SetFeedbackMessage(String),
    ClearFeedbackMessage,
    /// Clear name, email, password and remember-me.
    ResetForm,

    RegisterPending,
    RegisterFulfilled,
    /// `message` is the server-supplied reason, if any.
    RegisterRejected { message: Option<String> },

    GoogleLoginPending,
    GoogleLoginFulfilled,
    GoogleLoginRejected { message: Option<String> },
}

impl Action {
    /// Settlement action for a finished register call.
    #[must_use]
    pub fn register_settled(result: &Result<AuthResult, ApiError>) -> Self {
        match result {
            Ok(_) => Self::RegisterFulfilled,
            Err(e) => Self::RegisterRejected { message: e.server_message().map(str::to_owned) },
        }
    }

    /// Settlement action for a finished google-login call.
    #[must_use]
    pub fn google_login_settled(result: &Result<AuthResult, ApiError>) -> Self {
        match result {
            Ok(_) => Self::GoogleLoginFulfilled,
            Err(e) => Self::GoogleLoginRejected { message: e.server_message().map(str::to_owned) },
        }
    }
}

/// Whole store: form fields plus the lifecycle of each async operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub form: FormState,
    pub register: OpStatus,
    pub google_login: OpStatus,
}

impl SignupState {
    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        let form = &mut self.form;
        match action {
            Action::SetName(name) => form.name = name,
            Action::SetEmail(email) => form.email = email,
            Action::SetPassword(password) => form.password = password,
            Action::SetRememberMe(remember_me) => form.remember_me = remember_me,
            Action::SetFeedbackMessage(message) => form.feedback_message = message,
            Action::ClearFeedbackMessage => form.feedback_message.clear(),
            Action::ResetForm => form.reset(),

            Action::RegisterPending => self.register.start(),
            Action::RegisterFulfilled => {
                self.register.fulfill();
                form.feedback_message = REGISTER_SUCCESS.to_owned();
                form.reset();
            }
            Action::RegisterRejected { message } => {
                let message = rejection_message(message, REGISTER_FAILED);
                self.register.reject(&message);
                form.feedback_message = message;
            }

            Action::GoogleLoginPending => self.google_login.start(),
            Action::GoogleLoginFulfilled => {
                self.google_login.fulfill();
                form.feedback_message = GOOGLE_LOGIN_SUCCESS.to_owned();
            }
            Action::GoogleLoginRejected { message } => {
                let message = rejection_message(message, GOOGLE_LOGIN_FAILED);
                self.google_login.reject(&message);
                form.feedback_message = message;
            }
        }
    }

    /// `true` while either remote operation is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.register.is_pending() || self.google_login.is_pending()
    }
}

fn rejection_message(message: Option<String>, fallback: &str) -> String {
    message.filter(|m| !m.is_empty()).unwrap_or_else(|| fallback.to_owned())
}
