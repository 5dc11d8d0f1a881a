use std::time::Duration;

use dict_engine::{FailureKind, FetchSettings, PageFetcher, ReqwestPageFetcher, USER_AGENT};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_url(server: &MockServer, word: &str) -> Url {
    Url::parse(&format!("{}/search?q=define:{word}", server.uri())).unwrap()
}

#[tokio::test]
async fn fetcher_sends_the_browser_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "define:cat"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default()).unwrap();
    let output = fetcher.fetch(&search_url(&server, "cat")).await.unwrap();

    assert_eq!(output.bytes, b"<html>ok</html>");
    assert_eq!(output.metadata.status, 200);
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("text/html"));
}

#[tokio::test]
async fn non_success_status_is_definitive_and_never_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(404))
        // One request only: status answers do not consume I/O retries.
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default()).unwrap();
    let err = fetcher.fetch(&search_url(&server, "cat")).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn transport_timeouts_are_retried_up_to_the_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        // Initial attempt plus two retries.
        .expect(3)
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        io_retry_limit: 2,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings).unwrap();
    let err = fetcher.fetch(&search_url(&server, "cat")).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_oversized_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string("0123456789a"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings).unwrap();
    let err = fetcher.fetch(&search_url(&server, "cat")).await.unwrap_err();

    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }));
}

#[tokio::test]
async fn fetcher_rejects_non_html_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{}", "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default()).unwrap();
    let err = fetcher.fetch(&search_url(&server, "cat")).await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "application/json".to_string()
        }
    );
}
