//! Sign-up form state and its reducer.
//!
//! DESIGN
//! ======
//! State is split the same way the form is used: `form` holds the fields the
//! user edits plus the feedback line, `lifecycle` tracks each async operation
//! as an explicit state machine, and `signup` applies `Action`s to both.

pub mod form;
pub mod lifecycle;
pub mod signup;

pub use form::FormState;
pub use lifecycle::OpStatus;
pub use signup::{Action, SignupState};
