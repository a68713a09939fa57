//! Search and filter state for the explore view.
//!
//! The state holds the last stored result set and the current filters. The
//! displayed subset is always recomputed from the full result set; filtering
//! never touches the stored records.
//!
//! A search runs in two halves so the state need not stay locked while the
//! collaborator works: [`SearchState::begin_search`] issues a ticket and
//! marks the state loading, [`SearchState::complete_search`] stores the
//! outcome. Only the most recently issued ticket may store anything; older
//! completions are reported as [`Completion::Stale`] and dropped.

use tracing::{debug, info, warn};

use venthatgrant_core::models::grant::GrantResult;

use crate::error::SearchError;
use crate::filter::{GrantFilters, check_min_match_score};
use crate::request::SearchRequest;
use crate::searcher::GrantSearcher;

/// Handle for one in-flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The results became the stored set.
    Stored { count: usize },
    /// A newer search was started; this outcome was discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct SearchState {
    results: Vec<GrantResult>,
    /// Indices into `results`, in ranking order.
    displayed: Vec<usize>,
    filters: GrantFilters,
    last_issued: u64,
    loading: bool,
    last_error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Search ───────────────────────────────────────────────────────────────

    /// Validate `request` and start a search. Supersedes any search still
    /// in flight.
    pub fn begin_search(&mut self, request: &SearchRequest) -> Result<SearchTicket, SearchError> {
        request.validate()?;
        self.last_issued += 1;
        self.loading = true;
        debug!(ticket = self.last_issued, query = %request.query, "search started");
        Ok(SearchTicket(self.last_issued))
    }

    /// Record the outcome of the search behind `ticket`.
    ///
    /// On failure the stored results and filters are kept and the error is
    /// returned to the caller and remembered as [`SearchState::last_error`].
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<GrantResult>, SearchError>,
    ) -> Result<Completion, SearchError> {
        if ticket.0 != self.last_issued {
            debug!(ticket = ticket.0, latest = self.last_issued, "discarding stale search");
            return Ok(Completion::Stale);
        }
        self.loading = false;

        match outcome {
            Ok(results) => {
                let count = results.len();
                self.results = results;
                self.last_error = None;
                self.recompute();
                info!(
                    count,
                    displayed = self.displayed.len(),
                    "search results stored"
                );
                Ok(Completion::Stored { count })
            }
            Err(e) => {
                warn!(error = %e, "search failed, keeping previous results");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Run a whole search against `searcher` while holding the state.
    pub async fn search(
        &mut self,
        searcher: &dyn GrantSearcher,
        request: &SearchRequest,
    ) -> Result<Completion, SearchError> {
        let ticket = self.begin_search(request)?;
        debug!(searcher = searcher.name(), "delegating search");
        let outcome = searcher.search(request).await;
        self.complete_search(ticket, outcome)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ── Results ──────────────────────────────────────────────────────────────

    /// The full stored result set.
    pub fn results(&self) -> &[GrantResult] {
        &self.results
    }

    /// The filtered subset, in ranking order.
    pub fn displayed(&self) -> Vec<&GrantResult> {
        self.displayed.iter().map(|&i| &self.results[i]).collect()
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    pub fn result(&self, grant_id: i64) -> Option<&GrantResult> {
        self.results.iter().find(|g| g.id == grant_id)
    }

    /// Distinct grant types in the stored set, first-seen order.
    pub fn grant_types(&self) -> Vec<&str> {
        distinct(self.results.iter().map(|g| g.grant_type.as_str()))
    }

    /// Distinct countries in the stored set, first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        distinct(self.results.iter().filter_map(|g| g.country.as_deref()))
    }

    // ── Filters ──────────────────────────────────────────────────────────────

    pub fn filters(&self) -> &GrantFilters {
        &self.filters
    }

    pub fn set_min_match_score(&mut self, score: u8) -> Result<(), SearchError> {
        self.filters.min_match_score = Some(check_min_match_score(score)?);
        self.recompute();
        Ok(())
    }

    pub fn set_grant_type(&mut self, grant_type: Option<String>) {
        self.filters.grant_type = grant_type;
        self.recompute();
    }

    pub fn set_country(&mut self, country: Option<String>) {
        self.filters.country = country;
        self.recompute();
    }

    /// Replace all filters at once. Nothing changes if the score is invalid.
    pub fn apply_filters(&mut self, filters: GrantFilters) -> Result<(), SearchError> {
        filters.validate()?;
        self.filters = filters;
        self.recompute();
        Ok(())
    }

    /// Back to defaults: every stored record is displayed again.
    pub fn reset_filters(&mut self) {
        self.filters = GrantFilters::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        let filters = &self.filters;
        self.displayed = self
            .results
            .iter()
            .enumerate()
            .filter(|(_, g)| filters.matches(g))
            .map(|(i, _)| i)
            .collect();
        debug!(
            min_match_score = ?filters.min_match_score,
            grant_type = ?filters.grant_type,
            country = ?filters.country,
            displayed = self.displayed.len(),
            "filters applied"
        );
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
