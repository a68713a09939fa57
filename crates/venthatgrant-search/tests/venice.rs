//! Tests for the Venice searcher against a one-shot local HTTP responder.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use venthatgrant_core::models::profile::UserProfile;
use venthatgrant_search::venice::{VeniceSearcher, api_error_message, parse_grants};
use venthatgrant_search::{GrantSearcher, SearchError, SearchRequest};

const GRANTS_BODY: &str = r#"{"grants":[
    {"id":1,"title":"Innovation in Climate Research Grant","organization":"National Science Foundation",
     "amount":"$50,000 - $500,000","deadline":"2025-06-30","description":"Climate change research.",
     "match_score":92,"url":"https://example.com/grant1","type":"government"},
    {"id":2,"title":"Creative Arts Impact Initiative","organization":"Arts Foundation",
     "amount":"$10,000 - $25,000","deadline":"2025-05-15","description":"Social impact.",
     "match_score":87,"url":"https://example.com/grant2","type":"private","country":"USA",
     "fit_reason":"Community focus"}
]}"#;

/// Serve exactly one response and hand back the raw request that was received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (format!("http://{addr}/grants/search"), handle)
}

fn searcher(endpoint: &str) -> VeniceSearcher {
    VeniceSearcher::new(
        endpoint,
        Some("test-key".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[test]
fn missing_or_blank_key_is_a_configuration_error() {
    let none = VeniceSearcher::new("http://localhost", None, Duration::from_secs(1));
    assert!(matches!(none, Err(SearchError::MissingCredential)));

    let blank = VeniceSearcher::new(
        "http://localhost",
        Some("   ".to_string()),
        Duration::from_secs(1),
    );
    assert!(matches!(blank, Err(SearchError::MissingCredential)));
}

#[test]
fn error_message_prefers_body_message() {
    assert_eq!(
        api_error_message(401, r#"{"message":"Invalid API key"}"#),
        "Invalid API key"
    );
    assert_eq!(
        api_error_message(502, "<html>bad gateway</html>"),
        "API request failed with status 502"
    );
    assert_eq!(
        api_error_message(500, r#"{"error":"boom"}"#),
        "API request failed with status 500"
    );
}

#[test]
fn parse_rejects_out_of_range_scores() {
    let body = r#"{"grants":[{"id":9,"title":"t","organization":"o","amount":"a",
        "deadline":"d","description":"x","match_score":140,"url":"u","type":"private"}]}"#;
    assert!(matches!(parse_grants(body), Err(SearchError::Response(_))));
    assert!(matches!(parse_grants("{}"), Err(SearchError::Response(_))));
}

#[tokio::test]
async fn posts_request_with_bearer_token_and_documented_defaults() {
    let (endpoint, server) = serve_once("200 OK", GRANTS_BODY).await;

    let grants = searcher(&endpoint)
        .search(&SearchRequest::new("climate change"))
        .await
        .unwrap();

    assert_eq!(grants.len(), 2);
    assert_eq!(grants[0].id, 1);
    assert_eq!(grants[1].country.as_deref(), Some("USA"));
    assert_eq!(grants[1].fit_reason.as_deref(), Some("Community focus"));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /grants/search"));
    assert!(raw.to_lowercase().contains("authorization: bearer test-key"));

    let body = raw.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["query"], "climate change");
    assert_eq!(json["description"], "");
    assert_eq!(json["category"], "");
    assert_eq!(json["filters"]["includeGovernment"], true);
    assert_eq!(json["filters"]["includePrivate"], true);
    assert!(json["userProfile"].is_null());
}

#[tokio::test]
async fn sends_user_profile_in_camel_case() {
    let (endpoint, server) = serve_once("200 OK", r#"{"grants":[]}"#).await;

    let profile = UserProfile {
        role: "researcher".to_string(),
        funding_types: vec!["research".to_string(), "health".to_string()],
        region: "uk".to_string(),
        min_grant_size: "10k".to_string(),
        email: None,
    };
    let request = SearchRequest::new("neural networks")
        .description("Brain imaging")
        .include_private(false)
        .user_profile(profile);

    let grants = searcher(&endpoint).search(&request).await.unwrap();
    assert!(grants.is_empty());

    let raw = server.await.unwrap();
    let body = raw.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["description"], "Brain imaging");
    assert_eq!(json["filters"]["includePrivate"], false);
    assert_eq!(json["userProfile"]["fundingTypes"][1], "health");
    assert_eq!(json["userProfile"]["minGrantSize"], "10k");
}

#[tokio::test]
async fn non_success_status_surfaces_api_message() {
    let (endpoint, _server) =
        serve_once("401 Unauthorized", r#"{"message":"Invalid API key"}"#).await;

    let err = searcher(&endpoint)
        .search(&SearchRequest::new("music"))
        .await
        .unwrap_err();

    match err {
        SearchError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_reported() {
    // Bind then drop to get a port nobody is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = searcher(&format!("http://{addr}/grants/search"))
        .search(&SearchRequest::new("music"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Unreachable(_)));
}
