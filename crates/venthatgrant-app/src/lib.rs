//! venthatgrant-app library root.
//!
//! Configuration and the session that wires the store, the search state,
//! and the collaborators together. The `venthatgrant` binary is a thin
//! driver over these.

pub mod config;
pub mod error;
pub mod session;

pub use crate::error::SessionError;
pub use crate::session::Session;
