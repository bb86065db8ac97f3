//! Password input decorations: focus and the last validation error.
//!
//! The password text itself lives in the shared form store; this only
//! decides what the hint line under the input says.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use signup::SignupError;
use signup::password::strength_hint;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordFieldState {
    pub focused: bool,
    pub error: Option<String>,
}

impl PasswordFieldState {
    /// Typing clears a previous validation error.
    pub fn on_input(&mut self) {
        self.error = None;
    }

    pub fn on_rejected(&mut self, err: &SignupError) {
        self.error = Some(err.to_string());
    }

    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Text for the hint line, `None` when it should be hidden.
    pub fn hint(&self, password: &str) -> Option<String> {
        strength_hint(password, self.focused, self.error.as_deref())
    }
}
