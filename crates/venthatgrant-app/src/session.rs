//! One application run.
//!
//! A [`Session`] owns every piece of state the app touches: the collection
//! store, the search state, and the collaborators. Cloning a session shares
//! that state.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use venthatgrant_assist::{
    AgentConfig, AgentStatus, Assistant, SimulatedTweetingAgent, TweetReceipt, TweetingAgent,
};
use venthatgrant_core::models::critique::Critique;
use venthatgrant_core::models::grant::GrantResult;
use venthatgrant_core::models::proposal::{Proposal, ProposalUpdate};
use venthatgrant_core::models::report::Report;
use venthatgrant_core::models::saved_grant::SavedGrant;
use venthatgrant_search::catalog::CatalogSearcher;
use venthatgrant_search::venice::VeniceSearcher;
use venthatgrant_search::{Completion, GrantFilters, GrantSearcher, SearchRequest, SearchState};
use venthatgrant_store::{CascadeSummary, CollectionStore};

use crate::config::{AppConfig, SearchMode};
use crate::error::SessionError;

#[derive(Clone)]
pub struct Session {
    store: Arc<Mutex<CollectionStore>>,
    search: Arc<Mutex<SearchState>>,
    searcher: Arc<dyn GrantSearcher>,
    assistant: Assistant,
    agent: Arc<dyn TweetingAgent>,
}

impl Session {
    pub fn new(
        searcher: Arc<dyn GrantSearcher>,
        assistant: Assistant,
        agent: Arc<dyn TweetingAgent>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(CollectionStore::new())),
            search: Arc::new(Mutex::new(SearchState::new())),
            searcher,
            assistant,
            agent,
        }
    }

    /// Wire collaborators from `config`. Live mode needs an API key.
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let searcher: Arc<dyn GrantSearcher> = match config.search_mode {
            SearchMode::Live => Arc::new(VeniceSearcher::new(
                config.endpoint.clone(),
                config.api_key(),
                config.request_timeout(),
            )?),
            SearchMode::Catalog => Arc::new(CatalogSearcher::default()),
        };
        info!(searcher = searcher.name(), "session created");

        Ok(Self::new(
            searcher,
            Assistant::new(config.assistant_latency()),
            Arc::new(SimulatedTweetingAgent::new()),
        ))
    }

    pub fn searcher_name(&self) -> &'static str {
        self.searcher.name()
    }

    // ── Search ───────────────────────────────────────────────────────────────

    /// Run `request` against the configured searcher.
    ///
    /// The search state is unlocked while the searcher works, so a second
    /// search may start meanwhile; the older one then completes as
    /// [`Completion::Stale`].
    pub async fn search(&self, request: SearchRequest) -> Result<Completion, SessionError> {
        let ticket = self.search.lock().await.begin_search(&request)?;

        debug!(searcher = self.searcher.name(), query = %request.query, "delegating search");
        let outcome = self.searcher.search(&request).await;

        let completion = self.search.lock().await.complete_search(ticket, outcome)?;
        Ok(completion)
    }

    pub async fn is_loading(&self) -> bool {
        self.search.lock().await.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.search.lock().await.last_error().map(str::to_string)
    }

    pub async fn results(&self) -> Vec<GrantResult> {
        self.search.lock().await.results().to_vec()
    }

    pub async fn displayed(&self) -> Vec<GrantResult> {
        self.search
            .lock()
            .await
            .displayed()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Distinct grant types and countries in the stored results.
    pub async fn facets(&self) -> (Vec<String>, Vec<String>) {
        let state = self.search.lock().await;
        let types = state.grant_types().into_iter().map(str::to_string).collect();
        let countries = state.countries().into_iter().map(str::to_string).collect();
        (types, countries)
    }

    // ── Filters ──────────────────────────────────────────────────────────────
    // Each returns the displayed count after recomputation.

    pub async fn filters(&self) -> GrantFilters {
        self.search.lock().await.filters().clone()
    }

    pub async fn set_min_match_score(&self, score: u8) -> Result<usize, SessionError> {
        let mut state = self.search.lock().await;
        state.set_min_match_score(score)?;
        Ok(state.displayed_count())
    }

    pub async fn set_grant_type(&self, grant_type: Option<String>) -> usize {
        let mut state = self.search.lock().await;
        state.set_grant_type(grant_type);
        state.displayed_count()
    }

    pub async fn set_country(&self, country: Option<String>) -> usize {
        let mut state = self.search.lock().await;
        state.set_country(country);
        state.displayed_count()
    }

    pub async fn apply_filters(&self, filters: GrantFilters) -> Result<usize, SessionError> {
        let mut state = self.search.lock().await;
        state.apply_filters(filters)?;
        Ok(state.displayed_count())
    }

    pub async fn reset_filters(&self) -> usize {
        let mut state = self.search.lock().await;
        state.reset_filters();
        state.displayed_count()
    }

    // ── Saved grants ─────────────────────────────────────────────────────────

    /// Pin a result the user can currently see.
    pub async fn save_displayed_grant(&self, grant_id: i64) -> Result<SavedGrant, SessionError> {
        let grant = self
            .search
            .lock()
            .await
            .displayed()
            .into_iter()
            .find(|g| g.id == grant_id)
            .cloned()
            .ok_or(SessionError::GrantNotDisplayed(grant_id))?;

        Ok(self.store.lock().await.save_grant(grant))
    }

    pub async fn saved_grants(&self) -> Vec<SavedGrant> {
        self.store.lock().await.saved_grants()
    }

    pub async fn is_grant_saved(&self, grant_id: i64) -> bool {
        self.store.lock().await.is_grant_saved(grant_id)
    }

    pub async fn remove_saved_grant(&self, id: &str) -> Result<SavedGrant, SessionError> {
        Ok(self.store.lock().await.remove_saved_grant(id)?)
    }

    pub async fn remove_saved_grant_cascade(&self, id: &str) -> Result<CascadeSummary, SessionError> {
        Ok(self.store.lock().await.remove_saved_grant_cascade(id)?)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Draft a proposal for a saved grant and store it.
    pub async fn draft_proposal(&self, saved_grant_id: &str) -> Result<Proposal, SessionError> {
        let saved = self.store.lock().await.saved_grant(saved_grant_id)?;
        let draft = self.assistant.draft_proposal(&saved).await;

        let proposal = self
            .store
            .lock()
            .await
            .create_proposal(&saved.id, draft.title, draft.content);
        Ok(proposal)
    }

    pub async fn create_proposal(&self, grant_id: &str, title: &str, content: &str) -> Proposal {
        self.store.lock().await.create_proposal(grant_id, title, content)
    }

    pub async fn proposals(&self, grant_id: Option<&str>) -> Vec<Proposal> {
        self.store.lock().await.proposals(grant_id)
    }

    pub async fn proposal(&self, id: &str) -> Result<Proposal, SessionError> {
        Ok(self.store.lock().await.proposal(id)?)
    }

    pub async fn update_proposal(
        &self,
        id: &str,
        update: ProposalUpdate,
    ) -> Result<Proposal, SessionError> {
        Ok(self.store.lock().await.update_proposal(id, update)?)
    }

    pub async fn optimize_proposal(&self, id: &str) -> Result<Proposal, SessionError> {
        Ok(self.assistant.optimize_proposal(&self.store, id).await?)
    }

    pub async fn generate_report(&self, proposal_id: &str) -> Result<Report, SessionError> {
        Ok(self.assistant.generate_report(&self.store, proposal_id).await?)
    }

    pub async fn reports(&self, proposal_id: Option<&str>) -> Vec<Report> {
        self.store.lock().await.reports(proposal_id)
    }

    pub async fn generate_critique(&self, proposal_id: &str) -> Result<Vec<Critique>, SessionError> {
        Ok(self.assistant.generate_critique(&self.store, proposal_id).await?)
    }

    pub async fn critiques(&self, proposal_id: Option<&str>) -> Vec<Critique> {
        self.store.lock().await.critiques(proposal_id)
    }

    // ── Agent ────────────────────────────────────────────────────────────────

    pub async fn create_agent(&self, config: AgentConfig) -> Result<String, SessionError> {
        Ok(self.agent.create(config).await?)
    }

    pub async fn agent_status(&self, agent_id: &str) -> Result<AgentStatus, SessionError> {
        Ok(self.agent.status(agent_id).await?)
    }

    /// Tweet about one of the stored search results.
    pub async fn tweet_about_result(
        &self,
        agent_id: &str,
        grant_id: i64,
    ) -> Result<TweetReceipt, SessionError> {
        let grant = self
            .search
            .lock()
            .await
            .result(grant_id)
            .cloned()
            .ok_or(SessionError::UnknownResult(grant_id))?;
        debug!(agent_id, grant_id, "tweeting about result");
        Ok(self.agent.tweet_about_grant(agent_id, &grant).await?)
    }
}
