//! Browser glue shared by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window` lives here behind the `hydrate` feature,
//! so pages stay renderable during SSR and testable on the host.

pub mod google;
pub mod storage;
