use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::grant::GrantResult;

/// A search result the user pinned for later action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SavedGrant {
    pub id: String,
    pub grant: GrantResult,
    pub saved_at: jiff::Timestamp,
}
