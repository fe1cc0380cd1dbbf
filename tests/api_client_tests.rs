// HTTP client tests against a mock advocates API

mod common;

use advocate_directory::{
    AdvocateFetcher, FetchError, HttpAdvocateClient, SearchDataController, SearchOptions,
};
use common::settle;
use mockito::Matcher;
use std::sync::Arc;
use std::time::Duration;

const JOHN: &str = r#"{
    "data": [{
        "id": 1,
        "firstName": "John",
        "lastName": "Doe",
        "city": "New York",
        "degree": "MD",
        "specialties": ["Mental Health"],
        "yearsOfExperience": 10,
        "phoneNumber": "5551234567",
        "createdAt": "2023-01-01T00:00:00Z"
    }],
    "count": 1,
    "filters": {"search": "test", "city": "New York", "degree": "MD"}
}"#;

fn client(base_url: String) -> HttpAdvocateClient {
    HttpAdvocateClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_parses_list_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/advocates")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "test".into()),
            Matcher::UrlEncoded("city".into(), "New York".into()),
            Matcher::UrlEncoded("degree".into(), "MD".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(JOHN)
        .create_async()
        .await;

    let response = client(server.url())
        .fetch("/api/advocates?search=test&city=New%20York&degree=MD")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.count, 1);
    assert_eq!(response.data[0].first_name, "John");
    assert_eq!(
        response.filters.and_then(|f| f.city).as_deref(),
        Some("New York")
    );
}

#[tokio::test]
async fn test_non_success_status_maps_to_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/advocates")
        .with_status(500)
        .with_body(r#"{"error": "Failed to fetch advocates"}"#)
        .create_async()
        .await;

    let err = client(server.url()).fetch("/api/advocates").await.unwrap_err();

    assert_eq!(err, FetchError::Http(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_invalid_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/advocates")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client(server.url()).fetch("/api/advocates").await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_failure_maps_to_network_error() {
    let err = client("http://127.0.0.1:1".to_string())
        .fetch("/api/advocates")
        .await
        .unwrap_err();

    match err {
        FetchError::Network(message) => assert!(!message.is_empty()),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_seed_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/seed")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "advocates": [], "count": 0, "message": "Successfully seeded 0 advocate records"}"#)
        .create_async()
        .await;

    let seeded = client(server.url()).seed().await.unwrap();

    mock.assert_async().await;
    assert!(seeded.success);
    mock.remove_async().await;

    let _conflict = server
        .mock("POST", "/api/seed")
        .with_status(409)
        .create_async()
        .await;

    let err = client(server.url()).seed().await.unwrap_err();
    assert_eq!(err, FetchError::Http(409));
}

#[tokio::test]
async fn test_controller_over_http_issues_single_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/advocates")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "test".into()),
            Matcher::UrlEncoded("city".into(), "New York".into()),
            Matcher::UrlEncoded("degree".into(), "MD".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(JOHN)
        .expect(1)
        .create_async()
        .await;

    let search = SearchDataController::new(
        Arc::new(client(server.url())),
        SearchOptions::default()
            .with_search("test")
            .with_city("New York")
            .with_degree("MD"),
    );

    let snapshot = settle(&search).await;

    mock.assert_async().await;
    assert_eq!(snapshot.advocates.len(), 1);
    assert_eq!(snapshot.advocates[0].full_name(), "John Doe");
    assert!(snapshot.loading.error.is_none());
}
