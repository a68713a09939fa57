use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Proposal {
    pub id: String,
    /// Id of the saved grant this proposal targets. Not checked for existence.
    pub grant_id: String,
    pub title: String,
    pub content: String,
    pub status: ProposalStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Lifecycle of a proposal: draft → optimized → submitted.
///
/// The ordering is forward-only. Nothing enforces it at the storage level;
/// callers consult [`ProposalStatus::is_editable`] before offering edits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProposalStatus {
    #[default]
    Draft,
    Optimized,
    Submitted,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 3] = [Self::Draft, Self::Optimized, Self::Submitted];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Optimized => "optimized",
            Self::Submitted => "submitted",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Submitted
    }

    pub fn is_editable(self) -> bool {
        !self.is_terminal()
    }

    /// Whether moving to `next` follows the lifecycle. Staying put counts.
    pub fn can_advance_to(self, next: ProposalStatus) -> bool {
        next >= self
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
    }
}

/// A partial update to a proposal. Unset fields are left as they are.
///
/// `id` and `created_at` are not updatable; `updated_at` is always refreshed
/// when the update is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProposalUpdate {
    #[serde(default)]
    pub grant_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<ProposalStatus>,
}

impl ProposalUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_id(mut self, grant_id: impl Into<String>) -> Self {
        self.grant_id = Some(grant_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn status(mut self, status: ProposalStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.grant_id.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.status.is_none()
    }

    /// Merge the set fields into `proposal` and stamp `updated_at` with `now`.
    pub fn apply_to(self, proposal: &mut Proposal, now: jiff::Timestamp) {
        if let Some(grant_id) = self.grant_id {
            proposal.grant_id = grant_id;
        }
        if let Some(title) = self.title {
            proposal.title = title;
        }
        if let Some(content) = self.content {
            proposal.content = content;
        }
        if let Some(status) = self.status {
            proposal.status = status;
        }
        proposal.updated_at = now;
    }
}
