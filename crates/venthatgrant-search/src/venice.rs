//! Venice grant search API.
//!
//! `POST {endpoint}` with the [`SearchRequest`] as JSON and a bearer token.
//! A successful response is `{ "grants": [GrantResult, ...] }`. Error
//! responses may carry `{ "message": "..." }`, which is surfaced verbatim.

use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use venthatgrant_core::models::grant::GrantResult;

use crate::error::SearchError;
use crate::request::SearchRequest;
use crate::searcher::{BoxFuture, GrantSearcher};

pub const DEFAULT_ENDPOINT: &str = "https://api.venice.ai/grants/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct SearchResponse {
    grants: Vec<GrantResult>,
}

#[derive(Debug, Clone)]
pub struct VeniceSearcher {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl VeniceSearcher {
    /// Build a searcher. A missing or blank key is a configuration error.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(SearchError::MissingCredential)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_search(&self, request: &SearchRequest) -> Result<Vec<GrantResult>, SearchError> {
        info!(endpoint = %self.endpoint, query = %request.query, "searching grants");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "grant search request failed");
                SearchError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            let message = api_error_message(status.as_u16(), &body);
            warn!(status = status.as_u16(), %message, "grant search rejected");
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let grants = parse_grants(&body)?;
        info!(count = grants.len(), "grant search complete");
        Ok(grants)
    }
}

impl GrantSearcher for VeniceSearcher {
    fn name(&self) -> &'static str {
        "venice"
    }

    fn search<'a>(
        &'a self,
        request: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<Vec<GrantResult>, SearchError>> {
        Box::pin(self.post_search(request))
    }
}

/// Parse a success body, rejecting records with out-of-range scores.
pub fn parse_grants(body: &str) -> Result<Vec<GrantResult>, SearchError> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Response(e.to_string()))?;

    for grant in &parsed.grants {
        grant
            .validate()
            .map_err(|e| SearchError::Response(format!("grant {}: {e}", grant.id)))?;
    }

    Ok(parsed.grants)
}

/// The `message` field of an error body, or a generic status line.
pub fn api_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("API request failed with status {status}"))
}
