//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages read and write the shared `RwSignal<SignupState>` provided by
//! `App`; every mutation goes through `SignupState::dispatch`.

pub mod google_callback;
pub mod signup;
