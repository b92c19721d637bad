use httpmock::Method::GET;
use httpmock::MockServer;
use news_sentiment::{NewsBuilder, NewsClient, NsError};

use crate::common::{API_KEY, client_for, error_page, fixture, ok_page, reference_now, wire_article};

#[tokio::test]
async fn offline_news_uses_recorded_fixture() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "crypto")
            .query_param("sortBy", "publishedAt")
            .query_param("language", "en")
            .query_param("apiKey", API_KEY)
            .query_param("pageSize", "50")
            .query_param("page", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("everything", "crypto", "json"));
    });

    let client = client_for(&server);
    let batch = NewsBuilder::new(&client, "crypto")
        .days(1)
        .max_pages(1)
        .now(reference_now())
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(batch.failure.is_none());
    assert_eq!(batch.pages_fetched, 1);

    // The last fixture article is one second older than the cutoff.
    assert_eq!(batch.articles.len(), 4);
    let first = &batch.articles[0];
    assert_eq!(first.source, "CoinDesk");
    assert_eq!(first.published_at.to_rfc3339(), "2024-01-09T21:14:03+00:00");
    assert!(first.description.is_some());
    assert_eq!(batch.articles[1].description, None);
}

#[tokio::test]
async fn recency_cutoff_is_inclusive_and_keeps_provider_order() {
    let server = MockServer::start();
    let body = ok_page(vec![
        wire_article("late", "A", "2024-01-09T12:00:00Z"),
        wire_article("edge", "B", "2024-01-09T00:00:00Z"),
        wire_article("just before", "A", "2024-01-08T23:59:59Z"),
        wire_article("two days old", "C", "2024-01-08T10:00:00Z"),
        wire_article("out of order but fresh", "C", "2024-01-09T18:30:00Z"),
    ]);
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything").query_param("page", "1");
        then.status(200).body(body);
    });

    let batch = NewsBuilder::new(&client_for(&server), "crypto")
        .days(1)
        .max_pages(1)
        .now(reference_now())
        .fetch()
        .await
        .unwrap();

    let titles: Vec<&str> = batch.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["late", "edge", "out of order but fresh"]);
}

#[tokio::test]
async fn wider_window_keeps_older_articles() {
    let server = MockServer::start();
    let body = ok_page(vec![
        wire_article("today", "A", "2024-01-09T12:00:00Z"),
        wire_article("last week", "A", "2024-01-03T00:00:00Z"),
        wire_article("too old", "A", "2024-01-02T23:59:59Z"),
    ]);
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(body);
    });

    let batch = NewsBuilder::new(&client_for(&server), "crypto")
        .days(7)
        .max_pages(1)
        .now(reference_now())
        .fetch()
        .await
        .unwrap();

    assert_eq!(batch.articles.len(), 2);
}

#[tokio::test]
async fn null_fields_become_empty_strings() {
    let server = MockServer::start();
    let body = serde_json::json!({
        "status": "ok",
        "articles": [{
            "source": { "id": null, "name": null },
            "title": null,
            "description": null,
            "url": null,
            "publishedAt": "2024-01-09T10:00:00Z"
        }]
    })
    .to_string();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(body);
    });

    let batch = NewsBuilder::new(&client_for(&server), "crypto")
        .max_pages(1)
        .now(reference_now())
        .fetch()
        .await
        .unwrap();

    let a = &batch.articles[0];
    assert_eq!(a.title, "");
    assert_eq!(a.source, "");
    assert_eq!(a.url, "");
    assert_eq!(a.description, None);
}

#[tokio::test]
async fn malformed_body_is_a_fatal_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let err = NewsBuilder::new(&client_for(&server), "crypto")
        .now(reference_now())
        .fetch()
        .await
        .unwrap_err();

    match err {
        NsError::Json(_) => {}
        other => panic!("expected Json, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_date_format_is_a_fatal_error() {
    let server = MockServer::start();
    let body = ok_page(vec![wire_article("odd date", "A", "2024-01-09 10:00:00")]);
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(body);
    });

    let err = NewsBuilder::new(&client_for(&server), "crypto")
        .now(reference_now())
        .fetch()
        .await
        .unwrap_err();

    match err {
        NsError::Date { value, .. } => assert_eq!(value, "2024-01-09 10:00:00"),
        other => panic!("expected Date, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_error_on_first_page_returns_empty_batch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything").query_param("page", "1");
        then.status(401)
            .body(error_page("apiKeyInvalid", "Your API key is invalid or incorrect."));
    });

    let batch = NewsBuilder::new(&client_for(&server), "crypto")
        .now(reference_now())
        .fetch()
        .await
        .unwrap();

    assert!(batch.articles.is_empty());
    assert!(batch.is_partial());
    let failure = batch.failure.unwrap();
    assert_eq!(failure.page, 1);
    assert_eq!(failure.http_status, 401);
    assert_eq!(failure.code.as_deref(), Some("apiKeyInvalid"));
    assert!(failure.to_string().contains("apiKeyInvalid"));
}

#[test]
fn builder_requires_an_api_key() {
    let err = NewsClient::builder().build().unwrap_err();
    assert!(matches!(err, NsError::MissingApiKey));

    let err = NewsClient::builder().api_key("   ").build().unwrap_err();
    assert!(matches!(err, NsError::MissingApiKey));
}

#[test]
fn client_debug_redacts_the_key() {
    let client = NewsClient::builder().api_key("super-secret").build().unwrap();
    let dbg = format!("{client:?}");
    assert!(!dbg.contains("super-secret"));
    assert!(dbg.contains("newsapi.org"));
}
