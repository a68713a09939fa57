use tracing::info;

use venthatgrant_core::ids;
use venthatgrant_core::models::proposal::{Proposal, ProposalStatus, ProposalUpdate};

use crate::error::{RecordKind, StoreError};
use crate::store::CollectionStore;

impl CollectionStore {
    /// Append a new draft. `grant_id` is not checked against saved grants.
    pub fn create_proposal(
        &mut self,
        grant_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Proposal {
        let now = Self::now();
        let proposal = Proposal {
            id: ids::proposal(),
            grant_id: grant_id.into(),
            title: title.into(),
            content: content.into(),
            status: ProposalStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        info!(proposal_id = %proposal.id, grant_id = %proposal.grant_id, "proposal created");
        self.proposals.push(proposal.clone());
        proposal
    }

    /// All proposals, or only those for `grant_id`.
    pub fn proposals(&self, grant_id: Option<&str>) -> Vec<Proposal> {
        self.proposals
            .iter()
            .filter(|p| grant_id.is_none_or(|g| p.grant_id == g))
            .cloned()
            .collect()
    }

    pub fn proposals_with_status(&self, status: ProposalStatus) -> Vec<Proposal> {
        self.proposals
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn proposal(&self, id: &str) -> Result<Proposal, StoreError> {
        self.proposals
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::Proposal, id))
    }

    /// Merge `update` into the proposal and refresh `updated_at`.
    ///
    /// Status transitions are not policed here; a submitted proposal can
    /// still be changed.
    pub fn update_proposal(
        &mut self,
        id: &str,
        update: ProposalUpdate,
    ) -> Result<Proposal, StoreError> {
        let proposal = self
            .proposals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(RecordKind::Proposal, id))?;

        let status_change = update.status.filter(|s| *s != proposal.status);
        update.apply_to(proposal, Self::now());

        match status_change {
            Some(status) => info!(proposal_id = %id, status = %status, "proposal status changed"),
            None => info!(proposal_id = %id, "proposal updated"),
        }
        Ok(proposal.clone())
    }
}
