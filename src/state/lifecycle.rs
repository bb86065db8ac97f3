//! Per-operation async lifecycle.
//!
//! Each remote operation moves `Idle -> Pending -> Fulfilled | Rejected`.
//! A settled operation goes back to `Pending` when resubmitted; there is no
//! fencing against overlapping submissions.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Lifecycle of one async operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    /// Carries the user-facing message the rejection produced.
    Rejected(String),
}

impl OpStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// `true` once the operation has fulfilled or rejected.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Fulfilled | Self::Rejected(_))
    }

    pub(crate) fn start(&mut self) {
        *self = Self::Pending;
    }

    pub(crate) fn fulfill(&mut self) {
        *self = Self::Fulfilled;
    }

    pub(crate) fn reject(&mut self, message: &str) {
        *self = Self::Rejected(message.to_owned());
    }
}
