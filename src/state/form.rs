#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::RegisterRequest;

/// Field values of the sign-up form plus the last feedback message.
///
/// Only the reducer in [`super::signup`] mutates this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub feedback_message: String,
}

impl FormState {
    /// Clear the user-entered fields. The feedback message is kept.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.remember_me = false;
    }

    /// Payload for `POST /api/register` built from the current fields.
    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        }
    }
}
