use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A progress report filed against a proposal. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Report {
    pub id: String,
    pub proposal_id: String,
    pub content: String,
    pub submission_date: jiff::Timestamp,
    pub created_at: jiff::Timestamp,
}
