//! View-local state that never reaches the shared store.

pub mod password_field;
