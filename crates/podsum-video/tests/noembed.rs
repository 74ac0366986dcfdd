use std::net::SocketAddr;

use axum::{Json, Router, http::StatusCode, routing::get};
use podsum_core::PodsumError;
use podsum_video::MetadataFetcher;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn fetch_returns_metadata_on_success() {
    let app = Router::new().route(
        "/embed",
        get(|| async {
            Json(serde_json::json!({
                "title": "T",
                "author_name": "A",
                "thumbnail_url": "http://x/thumb.jpg"
            }))
        }),
    );
    let addr = serve(app).await;

    let fetcher = MetadataFetcher::with_base_url(format!("http://{addr}/embed"));
    let metadata = fetcher.fetch("abc123").await.unwrap();
    assert_eq!(metadata.title, "T");
    assert_eq!(metadata.author, "A");
    assert_eq!(metadata.thumbnail_url.as_deref(), Some("http://x/thumb.jpg"));
}

#[tokio::test]
async fn fetch_defaults_missing_fields() {
    let app = Router::new().route(
        "/embed",
        get(|| async { Json(serde_json::json!({"thumbnail_url": "http://x/t.jpg"})) }),
    );
    let addr = serve(app).await;

    let fetcher = MetadataFetcher::with_base_url(format!("http://{addr}/embed"));
    let metadata = fetcher.fetch("abc123").await.unwrap();
    assert_eq!(metadata.title, "Unknown Title");
    assert_eq!(metadata.author, "Unknown Author");
    assert_eq!(metadata.thumbnail_url.as_deref(), Some("http://x/t.jpg"));
}

#[tokio::test]
async fn fetch_maps_not_found_to_api_error() {
    let app = Router::new().route(
        "/embed",
        get(|| async { (StatusCode::NOT_FOUND, "no matching providers found") }),
    );
    let addr = serve(app).await;

    let fetcher = MetadataFetcher::with_base_url(format!("http://{addr}/embed"));
    let result = fetcher.fetch("abc123").await;
    match result {
        Err(PodsumError::Api(msg)) => assert!(msg.contains("404")),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_maps_malformed_body_to_parse_error() {
    let app = Router::new().route("/embed", get(|| async { "not json at all" }));
    let addr = serve(app).await;

    let fetcher = MetadataFetcher::with_base_url(format!("http://{addr}/embed"));
    let result = fetcher.fetch("abc123").await;
    assert!(matches!(result, Err(PodsumError::Parse(_))));
}

#[tokio::test]
async fn fetch_maps_unreachable_endpoint_to_network_error() {
    // Bind then drop so the port is closed by the time the fetch runs.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = MetadataFetcher::with_base_url(format!("http://{addr}/embed"));
    let result = fetcher.fetch("abc123").await;
    assert!(matches!(result, Err(PodsumError::Network(_))));
}
