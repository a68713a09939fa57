use serde::{Deserialize, Serialize};

use venthatgrant_core::models::profile::UserProfile;

use crate::error::SearchError;

/// Body of a grant search call.
///
/// Serializes to the collaborator's wire shape: optional text fields become
/// empty strings, both include flags default to `true`, and a missing
/// profile is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub filters: SourceFilters,
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
}

/// Which funder families the collaborator should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFilters {
    pub include_government: bool,
    pub include_private: bool,
}

impl Default for SourceFilters {
    fn default() -> Self {
        Self {
            include_government: true,
            include_private: true,
        }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            description: String::new(),
            category: String::new(),
            filters: SourceFilters::default(),
            user_profile: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn include_government(mut self, include: bool) -> Self {
        self.filters.include_government = include;
        self
    }

    pub fn include_private(mut self, include: bool) -> Self {
        self.filters.include_private = include;
        self
    }

    pub fn user_profile(mut self, profile: UserProfile) -> Self {
        self.user_profile = Some(profile);
        self
    }

    /// Reject blank queries before anything is sent.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(())
    }
}
