use serde::Serialize;
use tracing::{debug, info};

use venthatgrant_core::ids;
use venthatgrant_core::models::grant::GrantResult;
use venthatgrant_core::models::saved_grant::SavedGrant;

use crate::error::{RecordKind, StoreError};
use crate::store::CollectionStore;

/// What a cascading removal took with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeSummary {
    pub saved_grant_id: String,
    pub proposals: usize,
    pub reports: usize,
    pub critiques: usize,
}

impl CollectionStore {
    /// Pin a search result. The same result may be saved more than once.
    pub fn save_grant(&mut self, grant: GrantResult) -> SavedGrant {
        let saved = SavedGrant {
            id: ids::saved_grant(),
            grant,
            saved_at: Self::now(),
        };
        info!(saved_grant_id = %saved.id, grant_id = saved.grant.id, "grant saved");
        self.saved_grants.push(saved.clone());
        saved
    }

    pub fn saved_grants(&self) -> Vec<SavedGrant> {
        self.saved_grants.clone()
    }

    pub fn saved_grant(&self, id: &str) -> Result<SavedGrant, StoreError> {
        self.saved_grants
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::SavedGrant, id))
    }

    /// Whether a search result (by its API id) has already been pinned.
    pub fn is_grant_saved(&self, grant_id: i64) -> bool {
        self.saved_grants.iter().any(|g| g.grant.id == grant_id)
    }

    /// Remove one saved grant. Proposals, reports, and critiques that refer to
    /// it are left in place.
    pub fn remove_saved_grant(&mut self, id: &str) -> Result<SavedGrant, StoreError> {
        let index = self
            .saved_grants
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| StoreError::not_found(RecordKind::SavedGrant, id))?;
        let removed = self.saved_grants.remove(index);
        info!(saved_grant_id = %id, "saved grant removed");
        Ok(removed)
    }

    /// Remove a saved grant together with its proposals and their reports
    /// and critiques.
    pub fn remove_saved_grant_cascade(&mut self, id: &str) -> Result<CascadeSummary, StoreError> {
        self.remove_saved_grant(id)?;

        let proposal_ids: Vec<String> = self
            .proposals
            .iter()
            .filter(|p| p.grant_id == id)
            .map(|p| p.id.clone())
            .collect();
        debug!(saved_grant_id = %id, count = proposal_ids.len(), "cascading to proposals");

        let before = (self.proposals.len(), self.reports.len(), self.critiques.len());
        self.proposals.retain(|p| p.grant_id != id);
        self.reports
            .retain(|r| !proposal_ids.contains(&r.proposal_id));
        self.critiques
            .retain(|c| !proposal_ids.contains(&c.proposal_id));

        let summary = CascadeSummary {
            saved_grant_id: id.to_string(),
            proposals: before.0 - self.proposals.len(),
            reports: before.1 - self.reports.len(),
            critiques: before.2 - self.critiques.len(),
        };
        info!(
            saved_grant_id = %id,
            proposals = summary.proposals,
            reports = summary.reports,
            critiques = summary.critiques,
            "saved grant removed with dependents"
        );
        Ok(summary)
    }
}
