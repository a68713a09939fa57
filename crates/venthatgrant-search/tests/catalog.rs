use venthatgrant_search::catalog::{CatalogSearcher, GOVERNMENT, PRIVATE, demo_catalog};
use venthatgrant_search::{GrantSearcher, SearchRequest};

#[test]
fn demo_catalog_scores_are_valid() {
    for grant in demo_catalog() {
        assert!(grant.validate().is_ok(), "grant {} invalid", grant.id);
        assert!(grant.url.starts_with("https://example.com/"));
    }
}

#[test]
fn lookup_matches_any_term_case_insensitively() {
    let catalog = CatalogSearcher::default();
    let hits = catalog.lookup(&SearchRequest::new("CLIMATE"));
    let ids: Vec<i64> = hits.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn lookup_ranks_by_match_score() {
    let catalog = CatalogSearcher::default();
    let hits = catalog.lookup(&SearchRequest::new("research funding"));
    assert!(hits.len() > 1);
    assert!(hits.windows(2).all(|w| w[0].match_score >= w[1].match_score));
}

#[test]
fn lookup_honours_source_flags() {
    let catalog = CatalogSearcher::default();

    let only_private = catalog.lookup(
        &SearchRequest::new("research funding").include_government(false),
    );
    assert!(!only_private.is_empty());
    assert!(only_private.iter().all(|g| g.grant_type == PRIVATE));

    let only_government =
        catalog.lookup(&SearchRequest::new("research funding").include_private(false));
    assert!(!only_government.is_empty());
    assert!(only_government.iter().all(|g| g.grant_type == GOVERNMENT));

    let none = catalog.lookup(
        &SearchRequest::new("research funding")
            .include_government(false)
            .include_private(false),
    );
    assert!(none.is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
    let catalog = CatalogSearcher::default();
    assert!(catalog.lookup(&SearchRequest::new("zzzz-no-such-topic")).is_empty());
}

#[tokio::test]
async fn searcher_trait_delegates_to_lookup() {
    let catalog = CatalogSearcher::default();
    let request = SearchRequest::new("web3");
    let via_trait = catalog.search(&request).await.unwrap();
    assert_eq!(via_trait, catalog.lookup(&request));
    assert_eq!(catalog.name(), "catalog");
}
