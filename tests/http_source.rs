mod common;

use birdsearch::config::EndpointConfig;
use birdsearch::error::FetchError;
use birdsearch::source::{HttpSource, Suggestion, SuggestionSource};
use common::serve_once;

#[tokio::test]
async fn fetches_and_decodes_suggestions() {
    let (config, server) = serve_once(
        "200 OK",
        r#"[{"id":1,"title":"American Robin"},{"id":2,"title":"Ruffed Grouse"}]"#,
    )
    .await;
    let source = HttpSource::new(&config).expect("client");

    let suggestions = source.fetch("ame".to_string()).await.expect("suggestions");
    assert_eq!(
        suggestions,
        vec![
            Suggestion::new(1, "American Robin"),
            Suggestion::new(2, "Ruffed Grouse"),
        ]
    );
    assert_eq!(server.await.unwrap(), "GET /birds?q=ame HTTP/1.1");
}

#[tokio::test]
async fn query_is_url_encoded() {
    let (config, server) = serve_once("200 OK", "[]").await;
    let source = HttpSource::new(&config).expect("client");

    let suggestions = source.fetch("great owl&co".to_string()).await.expect("suggestions");
    assert!(suggestions.is_empty());
    assert_eq!(server.await.unwrap(), "GET /birds?q=great+owl%26co HTTP/1.1");
}

#[tokio::test]
async fn display_field_is_configurable() {
    let (config, _server) = serve_once("200 OK", r#"[{"id":5,"name":"Allen's Hummingbird"}]"#).await;
    let config = EndpointConfig {
        title_field: "name".to_string(),
        ..config
    };
    let source = HttpSource::new(&config).expect("client");

    let suggestions = source.fetch("all".to_string()).await.expect("suggestions");
    assert_eq!(suggestions, vec![Suggestion::new(5, "Allen's Hummingbird")]);
}

#[tokio::test]
async fn server_error_carries_body_message() {
    let (config, _server) = serve_once(
        "500 Internal Server Error",
        r#"{"message":"Database offline"}"#,
    )
    .await;
    let source = HttpSource::new(&config).expect("client");

    let err = source.fetch("ame".to_string()).await.unwrap_err();
    assert_eq!(
        err,
        FetchError::Status {
            status: 500,
            message: Some("Database offline".to_string()),
        }
    );
    assert_eq!(err.user_message("Error fetching suggestions"), "Database offline");
}

#[tokio::test]
async fn server_error_without_message_uses_fallback() {
    let (config, _server) = serve_once("404 Not Found", r#"{"error":"nope"}"#).await;
    let source = HttpSource::new(&config).expect("client");

    let err = source.fetch("ame".to_string()).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, message: None }));
    assert_eq!(err.user_message("Error fetching suggestions"), "Error fetching suggestions");
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let (config, _server) = serve_once("200 OK", r#"{"results":[]}"#).await;
    let source = HttpSource::new(&config).expect("client");

    let err = source.fetch("ame".to_string()).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = EndpointConfig {
        url: format!("http://{addr}/birds"),
        timeout_ms: 2_000,
        ..EndpointConfig::default()
    };
    let source = HttpSource::new(&config).expect("client");

    let err = source.fetch("ame".to_string()).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}
