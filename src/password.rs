//! Password policy: length-based strength and a small denylist.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on every keystroke for the strength hint and once more at
//! submit time, where a weak or denylisted password blocks registration
//! before anything reaches the network.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use std::fmt;

use crate::error::SignupError;

/// Passwords rejected outright regardless of length.
pub const COMMON_PASSWORDS: [&str; 5] = ["123456", "password", "123456789", "12345678", "12345"];

/// Minimum length (in characters) for a `Moderate` password.
pub const MODERATE_MIN_LEN: usize = 6;

/// Minimum length (in characters) for a `Strong` password.
pub const STRONG_MIN_LEN: usize = 12;

/// Coarse strength rating derived from length alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Label shown in the strength hint.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a password by its length in UTF-16 code units, so characters
/// outside the BMP count twice.
#[must_use]
pub fn classify_strength(password: &str) -> PasswordStrength {
    let len = password.encode_utf16().count();
    if len < MODERATE_MIN_LEN {
        PasswordStrength::Weak
    } else if len < STRONG_MIN_LEN {
        PasswordStrength::Moderate
    } else {
        PasswordStrength::Strong
    }
}

/// `false` when the password exactly matches a denylisted value.
#[must_use]
pub fn is_unique(password: &str) -> bool {
    !COMMON_PASSWORDS.contains(&password)
}

/// Submit-time policy: the password must be at least `Moderate` and not denylisted.
///
/// # Errors
///
/// Returns [`SignupError::WeakPassword`] when either check fails.
pub fn check_password(password: &str) -> Result<PasswordStrength, SignupError> {
    let strength = classify_strength(password);
    if strength == PasswordStrength::Weak || !is_unique(password) {
        return Err(SignupError::WeakPassword);
    }
    Ok(strength)
}

/// Text for the hint under the password field.
///
/// A local error wins over the strength label; the label only shows while
/// the field has focus.
#[must_use]
pub fn strength_hint(password: &str, focused: bool, error: Option<&str>) -> Option<String> {
    if let Some(error) = error.filter(|e| !e.is_empty()) {
        return Some(error.to_owned());
    }
    focused.then(|| format!("Password strength: {}", classify_strength(password)))
}
