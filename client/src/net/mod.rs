//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client and wire types live in the core `signup` crate; `api`
//! only wires them to build-time configuration and browser storage.

pub mod api;
