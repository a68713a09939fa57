use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One piece of structured feedback on a proposal. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Critique {
    pub id: String,
    pub proposal_id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub critique_type: CritiqueType,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CritiqueType {
    Strength,
    Weakness,
    Suggestion,
}

impl CritiqueType {
    /// Batch order used by the critique generator.
    pub const ALL: [CritiqueType; 3] = [Self::Strength, Self::Weakness, Self::Suggestion];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Weakness => "weakness",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for CritiqueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CritiqueType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCritiqueType(s.to_string()))
    }
}
