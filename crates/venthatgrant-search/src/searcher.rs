use std::future::Future;
use std::pin::Pin;

use venthatgrant_core::models::grant::GrantResult;

use crate::error::SearchError;
use crate::request::SearchRequest;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The external grant search collaborator.
///
/// Returns grant records in the collaborator's ranking order. Callers
/// validate the request first; implementations may assume a non-blank query.
pub trait GrantSearcher: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn search<'a>(
        &'a self,
        request: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<Vec<GrantResult>, SearchError>>;
}
