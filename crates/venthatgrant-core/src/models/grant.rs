use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A funding opportunity as returned by the search API.
///
/// Field names follow the API's wire format. Records are never mutated after
/// they are received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrantResult {
    pub id: i64,
    pub title: String,
    pub organization: String,
    /// Free text such as `"$50,000 - $500,000"`. Never parsed.
    pub amount: String,
    /// Date string as supplied by the API, e.g. `"2025-06-30"`.
    pub deadline: String,
    pub description: String,
    /// Relevance to the query, 0-100.
    pub match_score: u8,
    pub url: String,
    #[serde(rename = "type")]
    pub grant_type: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub fit_reason: Option<String>,
    #[serde(default)]
    pub draft_paragraph: Option<String>,
}

impl GrantResult {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.match_score > 100 {
            return Err(CoreError::InvalidMatchScore(self.match_score));
        }
        Ok(())
    }

    /// Hashtag form of the grant type: whitespace removed, e.g. `#CreativeArts`.
    pub fn type_hashtag(&self) -> String {
        let tag: String = self.grant_type.split_whitespace().collect();
        format!("#{tag}")
    }
}
