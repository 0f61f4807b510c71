//! End-to-end tests for the metadata fetch pipeline
//!
//! These tests run the real reqwest transport against wiremock servers to
//! cover the full validate → fetch → gate → extract path.

use richlinks::{
    fetch_metadata, try_fetch_metadata, FetchError, FetcherConfig, ReqwestFetcher,
};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a fetcher with short timeouts suitable for tests
fn test_fetcher(timeout_millis: u64) -> ReqwestFetcher {
    let config = FetcherConfig {
        timeout: Duration::from_millis(timeout_millis),
        connect_timeout: Duration::from_millis(timeout_millis),
        ..FetcherConfig::default()
    };
    ReqwestFetcher::new(&config).expect("failed to build fetcher")
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_success_with_og_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(html_response(
            r#"<html><head>
            <title>An Article</title>
            <meta property="og:description" content="X"/>
            <meta property="og:image" content="Y.png"/>
            </head><body></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);
    let url = format!("{}/article", mock_server.uri());

    let metadata = try_fetch_metadata(&fetcher, &url).await.expect("fetch failed");

    assert_eq!(metadata.title.as_deref(), Some("An Article"));
    assert_eq!(metadata.description.as_deref(), Some("X"));
    assert_eq!(metadata.image_url.as_deref(), Some("Y.png"));
    assert_eq!(metadata.url, url);
}

#[tokio::test]
async fn test_plain_page_without_og_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/post"))
        .respond_with(html_response(
            "<html><head><title>Plain Blog Post</title></head><body>words</body></html>",
        ))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);
    let url = format!("{}/post", mock_server.uri());

    let metadata = try_fetch_metadata(&fetcher, &url).await.expect("fetch failed");

    let expected_host = url::Url::parse(&mock_server.uri())
        .unwrap()
        .host_str()
        .unwrap()
        .to_lowercase();

    assert_eq!(metadata.title.as_deref(), Some("Plain Blog Post"));
    assert_eq!(metadata.description, None);
    assert_eq!(metadata.image_url, None);
    assert_eq!(metadata.host, expected_host);
}

#[tokio::test]
async fn test_http_404_fails_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);
    let url = format!("{}/gone", mock_server.uri());

    let result = try_fetch_metadata(&fetcher, &url).await;

    assert!(matches!(
        result,
        Err(FetchError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_empty_body_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);
    let url = format!("{}/empty", mock_server.uri());

    let result = try_fetch_metadata(&fetcher, &url).await;

    assert!(matches!(result, Err(FetchError::EmptyBody { .. })));
}

#[tokio::test]
async fn test_redirect_resolves_to_final_url() {
    let mock_server = MockServer::start().await;
    let target = format!("{}/final", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/short"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", target.as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(html_response(
            "<html><head><title>Landed</title></head><body></body></html>",
        ))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);
    let url = format!("{}/short", mock_server.uri());

    let metadata = try_fetch_metadata(&fetcher, &url).await.expect("fetch failed");

    // url and host reflect the redirect-resolved location
    assert_eq!(metadata.url, target);
    assert_eq!(metadata.title.as_deref(), Some("Landed"));
    assert_eq!(
        metadata.host,
        url::Url::parse(&target).unwrap().host_str().unwrap().to_lowercase()
    );
}

#[tokio::test]
async fn test_timeout_fails_within_bound() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            html_response("<html><head><title>Slow</title></head></html>")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(300);
    let url = format!("{}/slow", mock_server.uri());

    let started = std::time::Instant::now();
    let result = try_fetch_metadata(&fetcher, &url).await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_invalid_url_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_response("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);

    let result = fetch_metadata(&fetcher, "not a url at all").await;

    assert!(matches!(
        result.error(),
        Some(FetchError::InvalidUrl(_))
    ));
    // mock_server verifies the zero-request expectation on drop
}

#[tokio::test]
async fn test_repeated_fetch_is_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stable"))
        .respond_with(html_response(
            r#"<html><head>
            <title>Stable Page</title>
            <meta property="og:description" content="same every time"/>
            </head></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5_000);
    let url = format!("{}/stable", mock_server.uri());

    let first = try_fetch_metadata(&fetcher, &url).await.expect("first fetch");
    let second = try_fetch_metadata(&fetcher, &url).await.expect("second fetch");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on this port; connection is refused immediately
    let fetcher = test_fetcher(2_000);

    let result = try_fetch_metadata(&fetcher, "http://127.0.0.1:1/").await;

    assert!(matches!(
        result,
        Err(FetchError::Network { .. }) | Err(FetchError::Timeout { .. })
    ));
}
