use tracing::info;

use venthatgrant_core::ids;
use venthatgrant_core::models::critique::{Critique, CritiqueType};
use venthatgrant_core::models::report::Report;

use crate::error::{RecordKind, StoreError};
use crate::store::CollectionStore;

impl CollectionStore {
    pub fn create_report(
        &mut self,
        proposal_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Report {
        let now = Self::now();
        let report = Report {
            id: ids::report(),
            proposal_id: proposal_id.into(),
            content: content.into(),
            submission_date: now,
            created_at: now,
        };
        info!(report_id = %report.id, proposal_id = %report.proposal_id, "report created");
        self.reports.push(report.clone());
        report
    }

    pub fn reports(&self, proposal_id: Option<&str>) -> Vec<Report> {
        self.reports
            .iter()
            .filter(|r| proposal_id.is_none_or(|p| r.proposal_id == p))
            .cloned()
            .collect()
    }

    pub fn report(&self, id: &str) -> Result<Report, StoreError> {
        self.reports
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::Report, id))
    }

    pub fn create_critique(
        &mut self,
        proposal_id: impl Into<String>,
        content: impl Into<String>,
        critique_type: CritiqueType,
    ) -> Critique {
        let critique = Critique {
            id: ids::critique(),
            proposal_id: proposal_id.into(),
            content: content.into(),
            critique_type,
            created_at: Self::now(),
        };
        info!(
            critique_id = %critique.id,
            proposal_id = %critique.proposal_id,
            critique_type = %critique_type,
            "critique created"
        );
        self.critiques.push(critique.clone());
        critique
    }

    pub fn critiques(&self, proposal_id: Option<&str>) -> Vec<Critique> {
        self.critiques
            .iter()
            .filter(|c| proposal_id.is_none_or(|p| c.proposal_id == p))
            .cloned()
            .collect()
    }
}
