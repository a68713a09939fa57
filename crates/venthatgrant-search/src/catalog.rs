//! Offline demo catalog.
//!
//! A fixed set of sample grants for running without API access. Selecting it
//! is an explicit configuration choice; it is never substituted for a failed
//! live search.

use tracing::debug;

use venthatgrant_core::models::grant::GrantResult;

use crate::error::SearchError;
use crate::request::SearchRequest;
use crate::searcher::{BoxFuture, GrantSearcher};

pub const GOVERNMENT: &str = "government";
pub const PRIVATE: &str = "private";

#[derive(Debug, Clone)]
pub struct CatalogSearcher {
    grants: Vec<GrantResult>,
}

impl Default for CatalogSearcher {
    fn default() -> Self {
        Self::new(demo_catalog())
    }
}

impl CatalogSearcher {
    pub fn new(grants: Vec<GrantResult>) -> Self {
        Self { grants }
    }

    pub fn grants(&self) -> &[GrantResult] {
        &self.grants
    }

    /// Records containing any query term, best match first.
    pub fn lookup(&self, request: &SearchRequest) -> Vec<GrantResult> {
        let terms: Vec<String> = request
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let mut hits: Vec<GrantResult> = self
            .grants
            .iter()
            .filter(|g| source_allowed(request, g))
            .filter(|g| {
                let haystack = format!(
                    "{} {} {} {}",
                    g.title, g.organization, g.description, g.grant_type
                )
                .to_lowercase();
                terms.iter().any(|t| haystack.contains(t.as_str()))
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        debug!(query = %request.query, hits = hits.len(), "catalog lookup");
        hits
    }
}

fn source_allowed(request: &SearchRequest, grant: &GrantResult) -> bool {
    match grant.grant_type.as_str() {
        GOVERNMENT => request.filters.include_government,
        PRIVATE => request.filters.include_private,
        _ => true,
    }
}

impl GrantSearcher for CatalogSearcher {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn search<'a>(
        &'a self,
        request: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<Vec<GrantResult>, SearchError>> {
        Box::pin(async move { Ok::<_, SearchError>(self.lookup(request)) })
    }
}

#[allow(clippy::too_many_arguments)]
fn grant(
    id: i64,
    title: &str,
    organization: &str,
    amount: &str,
    deadline: &str,
    description: &str,
    match_score: u8,
    grant_type: &str,
    country: Option<&str>,
) -> GrantResult {
    GrantResult {
        id,
        title: title.to_string(),
        organization: organization.to_string(),
        amount: amount.to_string(),
        deadline: deadline.to_string(),
        description: description.to_string(),
        match_score,
        url: format!("https://example.com/grant{id}"),
        grant_type: grant_type.to_string(),
        country: country.map(str::to_string),
        fit_reason: None,
        draft_paragraph: None,
    }
}

/// Sample grants. All URLs point at `example.com`.
pub fn demo_catalog() -> Vec<GrantResult> {
    let mut smart = grant(
        4,
        "Innovate UK Smart Grant",
        "Innovate UK",
        "£25,000 - £500,000",
        "2025-11-15",
        "Funding for game-changing, commercially viable research and development, including AI startups.",
        88,
        GOVERNMENT,
        Some("UK"),
    );
    smart.fit_reason = Some("Backs early-stage AI ventures based in the UK.".to_string());
    smart.draft_paragraph = Some(
        "Our venture applies machine learning to a clearly defined market gap, \
         with a commercial route to scale within eighteen months."
            .to_string(),
    );

    vec![
        grant(
            1,
            "Innovation in Climate Research Grant",
            "National Science Foundation",
            "$50,000 - $500,000",
            "2025-06-30",
            "Funding for innovative approaches to climate change research and mitigation strategies.",
            92,
            GOVERNMENT,
            Some("USA"),
        ),
        grant(
            2,
            "Creative Arts Impact Initiative",
            "Arts Foundation",
            "$10,000 - $25,000",
            "2025-05-15",
            "Supporting creative projects that demonstrate social impact in local communities.",
            87,
            PRIVATE,
            Some("USA"),
        ),
        grant(
            3,
            "Emerging Technology Research Program",
            "Department of Energy",
            "$100,000 - $1,000,000",
            "2025-07-22",
            "Funding for research in emerging technology fields with potential for energy innovation.",
            85,
            GOVERNMENT,
            Some("USA"),
        ),
        smart,
        grant(
            5,
            "Discovery Research Award",
            "Wellcome Trust",
            "£1,000,000 - £5,000,000",
            "2025-09-30",
            "Support for established researchers pursuing bold questions in health and climate science.",
            91,
            PRIVATE,
            Some("UK"),
        ),
        grant(
            6,
            "Open Source Public Goods Round",
            "Gitcoin",
            "$5,000 - $50,000",
            "2025-08-01",
            "Quadratic funding for open-source web3 infrastructure and public goods.",
            74,
            PRIVATE,
            None,
        ),
    ]
}
