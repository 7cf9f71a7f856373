mod common;

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use fitdeck::config::{Config, LlmConfig};
use fitdeck::error::AppError;
use fitdeck::guidance::{
    guidance_request, GuidanceSource, HttpGuidanceClient, LlmProvider, OpenAiProvider,
};
use fitdeck::handlers::guidance::GuidanceState;

#[derive(Clone, Default)]
struct Seen {
    bodies: Arc<Mutex<Vec<Value>>>,
    auth: Arc<Mutex<Vec<String>>>,
}

async fn completions(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    seen.auth.lock().unwrap().push(auth.clone());
    seen.bodies.lock().unwrap().push(body);

    match auth.as_str() {
        "Bearer good-key" => (
            StatusCode::OK,
            Json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "model": "gpt-3.5-turbo-0125",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "## Equipment Required\n\nA bench." },
                    "finish_reason": "stop"
                }]
            })),
        ),
        "Bearer empty-key" => (
            StatusCode::OK,
            Json(json!({
                "model": "gpt-3.5-turbo-0125",
                "choices": [{ "index": 0, "message": { "role": "assistant", "content": null } }]
            })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" } })),
        ),
    }
}

async fn fake_openai() -> (String, Seen) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(seen.clone());
    let base = common::spawn_server(router).await;
    (format!("{base}/v1"), seen)
}

fn provider(base_url: &str, key: Option<&str>) -> OpenAiProvider {
    OpenAiProvider::new(LlmConfig {
        api_key: key.map(str::to_string),
        base_url: base_url.to_string(),
        model: "gpt-3.5-turbo".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_completion_success() {
    let (base, seen) = fake_openai().await;
    let provider = provider(&base, Some("good-key"));

    let response = provider.complete(&guidance_request("Bench Press")).await.unwrap();

    assert_eq!(response.content, "## Equipment Required\n\nA bench.");
    assert_eq!(response.model, "gpt-3.5-turbo-0125");

    let bodies = seen.bodies.lock().unwrap();
    assert_eq!(bodies[0]["model"], "gpt-3.5-turbo");
    assert_eq!(bodies[0]["messages"].as_array().unwrap().len(), 1);
    assert_eq!(bodies[0]["messages"][0]["role"], "system");
    assert!(bodies[0]["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("Bench Press"));
}

#[tokio::test]
async fn test_rejected_key_is_an_error() {
    let (base, _) = fake_openai().await;
    let provider = provider(&base, Some("bad-key"));

    match provider.complete(&guidance_request("Squat")).await {
        Err(AppError::Llm(message)) => assert!(message.contains("Incorrect API key")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_content_is_an_error() {
    let (base, _) = fake_openai().await;
    let provider = provider(&base, Some("empty-key"));

    assert!(matches!(
        provider.complete(&guidance_request("Squat")).await,
        Err(AppError::Llm(_))
    ));
}

#[tokio::test]
async fn test_missing_key_fails_without_calling_out() {
    let (base, seen) = fake_openai().await;
    let provider = provider(&base, None);

    assert!(provider.complete(&guidance_request("Squat")).await.is_err());
    assert!(seen.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_proxy_round_trip_through_http_client() {
    let (openai_base, _) = fake_openai().await;
    let state = GuidanceState {
        provider: Arc::new(provider(&openai_base, Some("good-key"))),
    };
    let proxy_base = common::spawn_server(fitdeck::routes::create_router(state)).await;

    let config = Config::from_lookup(|key| match key {
        "GUIDANCE_URL" => Some(proxy_base.clone()),
        _ => None,
    });
    let client = HttpGuidanceClient::from_config(&config).unwrap();
    let text = client.guidance("Lunge").await.unwrap();

    assert_eq!(text, "## Equipment Required\n\nA bench.");
}

#[tokio::test]
async fn test_proxy_failure_reaches_http_client_as_error() {
    let (openai_base, _) = fake_openai().await;
    let state = GuidanceState {
        provider: Arc::new(provider(&openai_base, Some("bad-key"))),
    };
    let proxy_base = common::spawn_server(fitdeck::routes::create_router(state)).await;

    let client = HttpGuidanceClient::new(proxy_base).unwrap();

    match client.guidance("Lunge").await {
        Err(AppError::Llm(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("Error generating exercise instructions"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
