//! venthatgrant-core
//!
//! Pure domain types and identifier conventions.
//! No I/O. This is the shared vocabulary of the VenThatGrant system.

pub mod error;
pub mod ids;
pub mod models;
