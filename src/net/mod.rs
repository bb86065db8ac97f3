//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` is the transport seam (`AuthApi`)
//! with its reqwest implementation, and `client` wraps a transport with the
//! session so successful logins persist their token.

pub mod api;
pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
