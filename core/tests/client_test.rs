//! # Backend Gateway Tests
//!
//! Integration tests for the HTTP gateway, exercising both exchanges
//! against a mock backend and checking that every failure mode is
//! normalized into the typed error taxonomy.

use anyhow::Result;
use querybot_core::{
    BackendError, QueryBackend, QueryBotClient, QueryRequest, QuerybotConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(query: &str) -> QueryRequest {
    QueryRequest {
        user_id: "frontend_user".to_string(),
        query: query.to_string(),
    }
}

#[tokio::test]
async fn test_query_success() -> Result<()> {
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "user_id": "frontend_user",
            "query": "What colors does the Smart Kettle come in?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Available in black, white, and teal."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = QueryBotClient::with_base_url(server.uri());

    // --- Act ---
    let reply = client
        .send_query(request("What colors does the Smart Kettle come in?"))
        .await?;

    // --- Assert ---
    assert_eq!(reply.response, "Available in black, white, and teal.");
    Ok(())
}

#[tokio::test]
async fn test_query_protocol_failure_extracts_detail() -> Result<()> {
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "index not built" })),
        )
        .mount(&server)
        .await;

    let client = QueryBotClient::with_base_url(server.uri());

    // --- Act ---
    let result = client.send_query(request("any question")).await;

    // --- Assert ---
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        BackendError::Protocol {
            status: 500,
            detail: Some(_)
        }
    ));
    assert_eq!(err.detail(), Some("index not built"));
    Ok(())
}

#[tokio::test]
async fn test_query_protocol_failure_with_unparseable_body() -> Result<()> {
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = QueryBotClient::with_base_url(server.uri());

    // --- Act ---
    let result = client.send_query(request("any question")).await;

    // --- Assert ---
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        BackendError::Protocol {
            status: 502,
            detail: None
        }
    ));
    assert_eq!(err.user_message(), "HTTP status 502");
    Ok(())
}

#[tokio::test]
async fn test_query_decode_failure_on_wrong_success_shape() -> Result<()> {
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "wrong key" })))
        .mount(&server)
        .await;

    let client = QueryBotClient::with_base_url(server.uri());

    // --- Act ---
    let result = client.send_query(request("any question")).await;

    // --- Assert ---
    assert!(matches!(result.unwrap_err(), BackendError::Decode(_)));
    Ok(())
}

#[tokio::test]
async fn test_query_transport_failure_when_backend_is_down() {
    // --- Arrange ---
    // Start a server only to reserve an address, then shut it down.
    // A builder-created server is not pooled, so dropping it actually
    // releases the socket instead of returning it to wiremock's pool.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = QueryBotClient::with_base_url(uri);

    // --- Act ---
    let result = client.send_query(request("any question")).await;

    // --- Assert ---
    let err = result.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn test_index_success() -> Result<()> {
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/index"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Indexed 42 documents" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = QueryBotClient::with_base_url(server.uri());

    // --- Act ---
    let result = client.trigger_index().await?;

    // --- Assert ---
    assert_eq!(result.message, "Indexed 42 documents");
    Ok(())
}

#[tokio::test]
async fn test_index_protocol_failure() -> Result<()> {
    // --- Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/index"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "detail": "indexer unavailable" })),
        )
        .mount(&server)
        .await;

    let client = QueryBotClient::with_base_url(server.uri());

    // --- Act ---
    let result = client.trigger_index().await;

    // --- Assert ---
    assert_eq!(result.unwrap_err().detail(), Some("indexer unavailable"));
    Ok(())
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let client = QueryBotClient::with_base_url("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_from_config_uses_configured_endpoint() {
    let config = QuerybotConfig {
        base_url: Some("http://backend:9000".to_string()),
        user_id: None,
        log_level: None,
    };
    let client = QueryBotClient::new(&config);
    assert_eq!(client.base_url(), "http://backend:9000");
}
