//! venthatgrant-store
//!
//! In-memory registries for saved grants, proposals, reports, and critiques.
//!
//! A [`CollectionStore`] lives for one session and is owned by whoever
//! creates it; there is no global instance and nothing is persisted.
//! Registries are independent: foreign keys are recorded but never checked.

pub mod error;
mod feedback;
mod grants;
mod proposals;
mod store;

pub use crate::error::{RecordKind, StoreError};
pub use crate::grants::CascadeSummary;
pub use crate::store::CollectionStore;
