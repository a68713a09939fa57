use serde::{Deserialize, Serialize};

use venthatgrant_core::models::grant::GrantResult;

use crate::error::SearchError;

pub const DEFAULT_MIN_MATCH_SCORE: u8 = 70;
pub const MIN_MATCH_SCORE_FLOOR: u8 = 50;
pub const MIN_MATCH_SCORE_CEILING: u8 = 100;

/// Client-side display filters. Every set filter must hold for a record to
/// show.
///
/// The score threshold starts unset: the slider shows
/// [`DEFAULT_MIN_MATCH_SCORE`] but nothing is hidden by score until a
/// threshold is chosen, so a fresh or reset view shows the full result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantFilters {
    pub min_match_score: Option<u8>,
    /// `None` shows every type.
    pub grant_type: Option<String>,
    /// `None` shows every country. Records without a country only pass here.
    pub country: Option<String>,
}

impl GrantFilters {
    pub fn min_match_score(mut self, score: u8) -> Self {
        self.min_match_score = Some(score);
        self
    }

    pub fn grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = Some(grant_type.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// The threshold a score control should display.
    pub fn score_threshold(&self) -> u8 {
        self.min_match_score.unwrap_or(DEFAULT_MIN_MATCH_SCORE)
    }

    pub fn matches(&self, grant: &GrantResult) -> bool {
        self.min_match_score.is_none_or(|s| grant.match_score >= s)
            && self
                .grant_type
                .as_deref()
                .is_none_or(|t| grant.grant_type == t)
            && self
                .country
                .as_deref()
                .is_none_or(|c| grant.country.as_deref() == Some(c))
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(score) = self.min_match_score {
            check_min_match_score(score)?;
        }
        Ok(())
    }
}

/// Accept a threshold only inside `50..=100`.
pub fn check_min_match_score(score: u8) -> Result<u8, SearchError> {
    if (MIN_MATCH_SCORE_FLOOR..=MIN_MATCH_SCORE_CEILING).contains(&score) {
        Ok(score)
    } else {
        Err(SearchError::ScoreOutOfRange(score))
    }
}
