use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use podsum_core::{Language, PodsumError, VideoMetadata};
use podsum_summary::SummaryGenerator;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn metadata() -> VideoMetadata {
    VideoMetadata {
        title: "T".to_string(),
        author: "A".to_string(),
        thumbnail_url: None,
    }
}

#[tokio::test]
async fn generate_returns_first_choice_verbatim() {
    let captured: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
    let state = captured.clone();
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |Json(body): Json<serde_json::Value>| {
            let state = state.clone();
            async move {
                *state.lock().unwrap() = Some(body);
                Json(serde_json::json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "• point one\n• point two"}}
                    ]
                }))
            }
        }),
    );
    let addr = serve(app).await;

    let generator = SummaryGenerator::with_base_url("test-key", format!("http://{addr}/v1"));
    let summary = generator
        .generate(&metadata(), Language::English)
        .await
        .unwrap();
    assert_eq!(summary, "• point one\n• point two");

    let body = captured.lock().unwrap().take().unwrap();
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["messages"][0]["role"], "system");
    assert!(
        body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("essential wisdom")
    );
    assert_eq!(body["messages"][1]["role"], "user");
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("10-12"));
    assert!(user.contains("\"T\" by A"));
}

#[tokio::test]
async fn generate_surfaces_provider_error_text() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                r#"{"error": {"message": "Incorrect API key provided"}}"#,
            )
        }),
    );
    let addr = serve(app).await;

    let generator = SummaryGenerator::with_base_url("bad-key", format!("http://{addr}/v1"));
    let result = generator.generate(&metadata(), Language::English).await;
    match result {
        Err(PodsumError::Generation(reason)) => {
            assert!(reason.contains("401"));
            assert!(reason.contains("Incorrect API key provided"));
        }
        other => panic!("expected Generation error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_rejects_empty_choices() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(serde_json::json!({"choices": []})) }),
    );
    let addr = serve(app).await;

    let generator = SummaryGenerator::with_base_url("test-key", format!("http://{addr}/v1"));
    let result = generator.generate(&metadata(), Language::Hebrew).await;
    match result {
        Err(PodsumError::Generation(reason)) => assert!(reason.contains("no choices")),
        other => panic!("expected Generation error, got {other:?}"),
    }
}
