use std::time::Duration;

use tokio::sync::Mutex;

use venthatgrant_assist::templates::OPTIMIZED_MARKER;
use venthatgrant_assist::{AssistError, Assistant, Latency};
use venthatgrant_core::models::critique::CritiqueType;
use venthatgrant_core::models::grant::GrantResult;
use venthatgrant_core::models::proposal::{ProposalStatus, ProposalUpdate};
use venthatgrant_store::CollectionStore;

fn climate_grant() -> GrantResult {
    GrantResult {
        id: 1,
        title: "Innovation in Climate Research Grant".to_string(),
        organization: "National Science Foundation".to_string(),
        amount: "$50,000 - $500,000".to_string(),
        deadline: "2025-06-30".to_string(),
        description: "Funding for innovative approaches to climate change research.".to_string(),
        match_score: 92,
        url: "https://example.com/grant1".to_string(),
        grant_type: "government".to_string(),
        country: Some("USA".to_string()),
        fit_reason: None,
        draft_paragraph: None,
    }
}

fn assistant() -> Assistant {
    Assistant::new(Latency::NONE)
}

async fn store_with_proposal() -> (Mutex<CollectionStore>, String) {
    let mut store = CollectionStore::new();
    let saved = store.save_grant(climate_grant());
    let proposal = store.create_proposal(&saved.id, "Proposal for climate", "Original body");
    (Mutex::new(store), proposal.id)
}

#[test]
fn default_latency_matches_interactive_pacing() {
    let latency = Latency::default();
    assert_eq!(latency.draft.as_millis(), 2000);
    assert_eq!(latency.optimize.as_millis(), 1500);
    assert_eq!(Assistant::default().latency(), latency);
}

#[tokio::test]
async fn draft_uses_grant_title() {
    let mut store = CollectionStore::new();
    let saved = store.save_grant(climate_grant());

    let draft = assistant().draft_proposal(&saved).await;

    assert_eq!(draft.title, "Proposal for Innovation in Climate Research Grant");
    assert!(draft.content.starts_with("# Research Proposal: Innovation in Climate Research Grant"));
    assert!(draft.content.contains("## Budget Justification"));
    // Drafting never writes to the store.
    assert!(store.proposals(None).is_empty());
}

#[tokio::test]
async fn optimize_appends_block_and_marks_optimized() {
    let (store, id) = store_with_proposal().await;

    let updated = assistant().optimize_proposal(&store, &id).await.unwrap();

    assert_eq!(updated.status, ProposalStatus::Optimized);
    assert!(updated.content.starts_with("Original body\n\n"));
    assert!(updated.content.contains(OPTIMIZED_MARKER));
    assert!(updated.updated_at >= updated.created_at);

    let stored = store.lock().await.proposal(&id).unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn optimize_twice_appends_twice() {
    let (store, id) = store_with_proposal().await;
    let assistant = assistant();

    assistant.optimize_proposal(&store, &id).await.unwrap();
    let second = assistant.optimize_proposal(&store, &id).await.unwrap();

    assert_eq!(second.content.matches(OPTIMIZED_MARKER).count(), 2);
}

#[tokio::test]
async fn optimize_unknown_proposal_fails() {
    let store = Mutex::new(CollectionStore::new());

    let err = assistant().optimize_proposal(&store, "proposal-missing").await.unwrap_err();

    assert!(matches!(err, AssistError::ProposalNotFound(ref id) if id == "proposal-missing"));
    assert!(store.lock().await.is_empty());
}

#[tokio::test]
async fn report_is_linked_and_titled() {
    let (store, id) = store_with_proposal().await;

    let report = assistant().generate_report(&store, &id).await.unwrap();

    assert_eq!(report.proposal_id, id);
    assert!(report.content.starts_with("# Progress Report for \"Proposal for climate\""));
    assert_eq!(store.lock().await.reports(Some(&id)), vec![report]);
}

#[tokio::test]
async fn report_for_unknown_proposal_creates_nothing() {
    let store = Mutex::new(CollectionStore::new());

    let err = assistant().generate_report(&store, "nope").await.unwrap_err();

    assert!(matches!(err, AssistError::ProposalNotFound(_)));
    assert!(store.lock().await.reports(None).is_empty());
}

#[tokio::test]
async fn critique_yields_one_of_each_kind_in_order() {
    let (store, id) = store_with_proposal().await;

    let critiques = assistant().generate_critique(&store, &id).await.unwrap();

    let kinds: Vec<_> = critiques.iter().map(|c| c.critique_type).collect();
    assert_eq!(kinds, CritiqueType::ALL.to_vec());
    assert!(critiques.iter().all(|c| c.proposal_id == id));
    assert_eq!(store.lock().await.critiques(Some(&id)).len(), 3);
}

#[tokio::test]
async fn critique_does_not_touch_the_proposal() {
    let (store, id) = store_with_proposal().await;
    let before = store.lock().await.proposal(&id).unwrap();

    assistant().generate_critique(&store, &id).await.unwrap();

    assert_eq!(store.lock().await.proposal(&id).unwrap(), before);
}

fn slow_assistant() -> Assistant {
    Assistant::new(Latency::uniform(Duration::from_millis(200)))
}

async fn after_a_moment() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn optimize_builds_on_edits_made_while_waiting() {
    let (store, id) = store_with_proposal().await;

    let assistant = slow_assistant();
    let (optimized, _) = tokio::join!(assistant.optimize_proposal(&store, &id), async {
        after_a_moment().await;
        store
            .lock()
            .await
            .update_proposal(&id, ProposalUpdate::new().content("Edited by user"))
            .unwrap();
    });

    let optimized = optimized.unwrap();
    assert!(optimized.content.starts_with("Edited by user\n\n"));
    assert!(optimized.content.contains(OPTIMIZED_MARKER));
}

#[tokio::test]
async fn optimize_leaves_proposal_submitted_while_waiting() {
    let (store, id) = store_with_proposal().await;

    let assistant = slow_assistant();
    let (optimized, _) = tokio::join!(assistant.optimize_proposal(&store, &id), async {
        after_a_moment().await;
        let update = ProposalUpdate::new()
            .content("Edited by user")
            .status(ProposalStatus::Submitted);
        store.lock().await.update_proposal(&id, update).unwrap();
    });

    assert!(matches!(optimized, Err(AssistError::ProposalSubmitted(_))));
    let stored = store.lock().await.proposal(&id).unwrap();
    assert_eq!(stored.status, ProposalStatus::Submitted);
    assert_eq!(stored.content, "Edited by user");
}

#[tokio::test]
async fn submitted_proposal_is_not_optimized() {
    let (store, id) = store_with_proposal().await;
    store
        .lock()
        .await
        .update_proposal(&id, ProposalUpdate::new().status(ProposalStatus::Submitted))
        .unwrap();

    let err = assistant().optimize_proposal(&store, &id).await.unwrap_err();

    assert!(matches!(err, AssistError::ProposalSubmitted(_)));
}

#[tokio::test]
async fn report_is_dropped_when_proposal_removed_while_waiting() {
    let mut store = CollectionStore::new();
    let saved = store.save_grant(climate_grant());
    let id = store.create_proposal(&saved.id, "Proposal", "Body").id;
    let store = Mutex::new(store);

    let assistant = slow_assistant();
    let (report, summary) = tokio::join!(assistant.generate_report(&store, &id), async {
        after_a_moment().await;
        store.lock().await.remove_saved_grant_cascade(&saved.id).unwrap()
    });

    assert!(matches!(report, Err(AssistError::ProposalNotFound(_))));
    assert_eq!(summary.proposals, 1);
    assert!(store.lock().await.reports(None).is_empty());
}

#[tokio::test]
async fn critique_is_dropped_when_proposal_removed_while_waiting() {
    let mut store = CollectionStore::new();
    let saved = store.save_grant(climate_grant());
    let id = store.create_proposal(&saved.id, "Proposal", "Body").id;
    let store = Mutex::new(store);

    let assistant = slow_assistant();
    let (critiques, _) = tokio::join!(assistant.generate_critique(&store, &id), async {
        after_a_moment().await;
        store.lock().await.remove_saved_grant_cascade(&saved.id).unwrap()
    });

    assert!(matches!(critiques, Err(AssistError::ProposalNotFound(_))));
    assert!(store.lock().await.critiques(None).is_empty());
}
