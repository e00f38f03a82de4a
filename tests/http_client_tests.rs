//! Integration tests for the HTTP transport.
//!
//! These tests run the client against a local mock server and verify URL
//! construction, default headers, timeouts and body handling.

use std::time::{Duration, Instant};

use vogue_api::clients::{HttpClient, HttpError, HttpRequest};
use vogue_api::{BaseUrl, VogueConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a config pointing at the mock server.
fn config_for(server: &MockServer) -> VogueConfig {
    VogueConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_agent("vogue-tests/1.0")
        .build()
        .unwrap()
}

fn graphql_request(document: &str) -> HttpRequest {
    HttpRequest::builder("graphql")
        .query_param("query", document)
        .build()
}

// ============================================================================
// Request Construction Tests
// ============================================================================

#[tokio::test]
async fn test_request_is_get_with_query_parameter() {
    let server = MockServer::start().await;
    let document = "query{allBrands{Brand{name slug}}}";

    Mock::given(method("GET"))
        .and(path("/graphql"))
        .and(query_param("query", document))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let response = client.request(graphql_request(document)).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_query_uses_percent_twenty_for_spaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    client
        .request(graphql_request("query{a b+c}"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let raw_query = requests[0].url.query().unwrap();
    assert_eq!(raw_query, "query=query%7Ba%20b%2Bc%7D");
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    let host = format!("127.0.0.1:{}", server.address().port());

    Mock::given(method("GET"))
        .and(header("user-agent", "vogue-tests/1.0"))
        .and(header("content-type", "application/json"))
        .and(header("host", host.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let response = client.request(graphql_request("query{x}")).await.unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_configured_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("accept-language", "en-GB"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = VogueConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .header("Accept-Language", "en-GB")
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    client.request(graphql_request("query{x}")).await.unwrap();
}

// ============================================================================
// Response Handling Tests
// ============================================================================

#[tokio::test]
async fn test_response_body_and_headers_are_returned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "abc-123")
                .set_body_string(r#"{"data":{}}"#),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let response = client.request(graphql_request("query{x}")).await.unwrap();

    assert_eq!(response.text(), r#"{"data":{}}"#);
    assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"data":null}"#))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let response = client.request(graphql_request("query{x}")).await.unwrap();

    assert_eq!(response.code, 500);
    assert!(!response.is_ok());
    assert_eq!(response.text(), r#"{"data":null}"#);
}

#[tokio::test]
async fn test_empty_body_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let result = client.request(graphql_request("query{x}")).await;

    assert!(matches!(result, Err(HttpError::NoData)));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = VogueConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let started = Instant::now();
    let result = client.request(graphql_request("query{x}")).await;
    let elapsed = started.elapsed();

    match result {
        Err(HttpError::Timeout { timeout }) => assert_eq!(timeout, Duration::from_millis(200)),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert!(elapsed < Duration::from_millis(1500), "took {elapsed:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = VogueConfig::builder()
        .base_url(BaseUrl::new(format!("http://127.0.0.1:{port}")).unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let result = client.request(graphql_request("query{x}")).await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}
