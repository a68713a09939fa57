use venthatgrant_core::models::critique::Critique;
use venthatgrant_core::models::proposal::Proposal;
use venthatgrant_core::models::report::Report;
use venthatgrant_core::models::saved_grant::SavedGrant;

/// Session-scoped registries. Each `Vec` keeps creation order.
#[derive(Debug, Default)]
pub struct CollectionStore {
    pub(crate) saved_grants: Vec<SavedGrant>,
    pub(crate) proposals: Vec<Proposal>,
    pub(crate) reports: Vec<Report>,
    pub(crate) critiques: Vec<Critique>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.saved_grants.is_empty()
            && self.proposals.is_empty()
            && self.reports.is_empty()
            && self.critiques.is_empty()
    }

    pub(crate) fn now() -> jiff::Timestamp {
        jiff::Timestamp::now()
    }
}
