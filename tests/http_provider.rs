//! HTTP word provider against a local server.

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::time::Duration;
use wordie::config::ProviderConfig;
use wordie::game::{GameController, GameStatus};
use wordie::provider::{HttpWordProvider, ProviderError, WordProvider};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn provider(base: &str, timeout: Duration) -> HttpWordProvider {
    HttpWordProvider::new(&ProviderConfig::new(base, timeout).unwrap()).unwrap()
}

#[tokio::test]
async fn fetches_and_uppercases_word() {
    let base = serve(Router::new().route(
        "/api/wordie/word",
        get(|| async { Json(json!({ "word": "crane" })) }),
    ))
    .await;

    let word = provider(&base, Duration::from_secs(5)).fetch_word().await.unwrap();
    assert_eq!(word.text(), "CRANE");
}

#[tokio::test]
async fn error_status_is_reported() {
    let base = serve(Router::new().route(
        "/api/wordie/word",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let err = provider(&base, Duration::from_secs(5)).fetch_word().await.unwrap_err();
    assert_eq!(err, ProviderError::Status { code: 500 });
}

#[tokio::test]
async fn missing_word_field_is_decode_error() {
    let base = serve(Router::new().route(
        "/api/wordie/word",
        get(|| async { Json(json!({ "other": 1 })) }),
    ))
    .await;

    let err = provider(&base, Duration::from_secs(5)).fetch_word().await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn unplayable_word_is_rejected() {
    let base = serve(Router::new().route(
        "/api/wordie/word",
        get(|| async { Json(json!({ "word": "banana" })) }),
    ))
    .await;

    let err = provider(&base, Duration::from_secs(5)).fetch_word().await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidWord { ref word, .. } if word == "banana"));
}

#[tokio::test]
async fn slow_service_times_out() {
    let base = serve(Router::new().route(
        "/api/wordie/word",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "word": "crane" }))
        }),
    ))
    .await;

    let err = provider(&base, Duration::from_millis(100))
        .fetch_word()
        .await
        .unwrap_err();
    assert_eq!(err, ProviderError::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider(&format!("http://{addr}"), Duration::from_secs(5))
        .fetch_word()
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Transport { .. }), "{err:?}");
}

#[tokio::test]
async fn restart_endpoint_round_trip() {
    let base = serve(Router::new().route(
        "/api/wordie/restart",
        post(|| async { Json(json!({ "message": "restarted", "round": 2 })) }),
    ))
    .await;

    let response = provider(&base, Duration::from_secs(5)).restart().await.unwrap();
    assert_eq!(response.message.as_deref(), Some("restarted"));
    assert_eq!(response.extra.get("round"), Some(&Value::from(2)));
}

#[tokio::test]
async fn controller_plays_against_http_service() {
    let base = serve(Router::new().route(
        "/api/wordie/word",
        get(|| async { Json(json!({ "word": "apple" })) }),
    ))
    .await;
    let provider = provider(&base, Duration::from_secs(5));

    let mut controller = GameController::new();
    controller.load_word(&provider).await.unwrap();
    assert_eq!(controller.phase(), GameStatus::InProgress);

    controller.enter_guess("apple").unwrap();
    assert_eq!(controller.phase(), GameStatus::Won);
}
