//! venthatgrant-search
//!
//! Grant search: the request sent to the search collaborator, the
//! collaborators themselves (Venice HTTP API and an offline demo catalog),
//! and the client-side search/filter state that sits in front of them.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod request;
pub mod searcher;
pub mod state;
pub mod venice;

pub use crate::error::SearchError;
pub use crate::filter::GrantFilters;
pub use crate::request::SearchRequest;
pub use crate::searcher::GrantSearcher;
pub use crate::state::{Completion, SearchState, SearchTicket};
