use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use venthatgrant_core::models::critique::{Critique, CritiqueType};
use venthatgrant_core::models::proposal::{Proposal, ProposalStatus, ProposalUpdate};
use venthatgrant_core::models::report::Report;
use venthatgrant_core::models::saved_grant::SavedGrant;
use venthatgrant_store::{CollectionStore, StoreError};

use crate::error::AssistError;
use crate::templates;

/// Simulated model latency per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub draft: Duration,
    pub optimize: Duration,
    pub report: Duration,
    pub critique: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency::uniform(Duration::ZERO);

    pub const fn uniform(delay: Duration) -> Self {
        Self {
            draft: delay,
            optimize: delay,
            report: delay,
            critique: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            draft: Duration::from_millis(2000),
            optimize: Duration::from_millis(1500),
            report: Duration::from_millis(2000),
            critique: Duration::from_millis(2000),
        }
    }
}

/// A generated title and body, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalDraft {
    pub title: String,
    pub content: String,
}

/// The simulated writing assistant.
///
/// Store-backed operations read the proposal, let the latency elapse with the
/// lock released, then re-read it under the lock they write with. Edits,
/// submissions and removals made during the latency are honoured.
#[derive(Debug, Clone, Default)]
pub struct Assistant {
    latency: Latency,
}

impl Assistant {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub async fn draft_proposal(&self, saved: &SavedGrant) -> ProposalDraft {
        tokio::time::sleep(self.latency.draft).await;
        info!(saved_grant_id = %saved.id, "proposal drafted");
        ProposalDraft {
            title: templates::proposal_title(&saved.grant.title),
            content: templates::proposal_draft(&saved.grant.title),
        }
    }

    /// Append the optimization block and mark the proposal optimized.
    /// Submitted proposals are left alone.
    pub async fn optimize_proposal(
        &self,
        store: &Mutex<CollectionStore>,
        proposal_id: &str,
    ) -> Result<Proposal, AssistError> {
        ensure_open(&lookup(store, proposal_id).await?)?;
        tokio::time::sleep(self.latency.optimize).await;

        let mut store = store.lock().await;
        let latest = current(&store, proposal_id)?;
        ensure_open(&latest)?;

        let update = ProposalUpdate::new()
            .content(templates::optimized(&latest.content))
            .status(ProposalStatus::Optimized);
        let updated = store
            .update_proposal(proposal_id, update)
            .map_err(|e| not_found_as_proposal(e, proposal_id))?;

        info!(proposal_id, "proposal optimized");
        Ok(updated)
    }

    pub async fn generate_report(
        &self,
        store: &Mutex<CollectionStore>,
        proposal_id: &str,
    ) -> Result<Report, AssistError> {
        lookup(store, proposal_id).await?;
        tokio::time::sleep(self.latency.report).await;

        let mut store = store.lock().await;
        let proposal = current(&store, proposal_id)?;
        let report = store.create_report(proposal_id, templates::progress_report(&proposal.title));
        info!(proposal_id, report_id = %report.id, "report generated");
        Ok(report)
    }

    /// Exactly three critiques: strength, weakness, suggestion.
    pub async fn generate_critique(
        &self,
        store: &Mutex<CollectionStore>,
        proposal_id: &str,
    ) -> Result<Vec<Critique>, AssistError> {
        lookup(store, proposal_id).await?;
        tokio::time::sleep(self.latency.critique).await;

        let mut store = store.lock().await;
        current(&store, proposal_id)?;
        let critiques: Vec<Critique> = CritiqueType::ALL
            .into_iter()
            .map(|kind| store.create_critique(proposal_id, templates::critique(kind), kind))
            .collect();
        info!(proposal_id, count = critiques.len(), "critique generated");
        Ok(critiques)
    }
}

async fn lookup(store: &Mutex<CollectionStore>, proposal_id: &str) -> Result<Proposal, AssistError> {
    store
        .lock()
        .await
        .proposal(proposal_id)
        .map_err(|e| not_found_as_proposal(e, proposal_id))
}

fn current(store: &CollectionStore, proposal_id: &str) -> Result<Proposal, AssistError> {
    store
        .proposal(proposal_id)
        .map_err(|e| not_found_as_proposal(e, proposal_id))
}

fn ensure_open(proposal: &Proposal) -> Result<(), AssistError> {
    if proposal.status.is_terminal() {
        return Err(AssistError::ProposalSubmitted(proposal.id.clone()));
    }
    Ok(())
}

fn not_found_as_proposal(err: StoreError, proposal_id: &str) -> AssistError {
    match err {
        StoreError::NotFound { .. } => AssistError::ProposalNotFound(proposal_id.to_string()),
    }
}
