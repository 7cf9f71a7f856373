#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;

use fitdeck::content::{ContentSource, QueryRequest};
use fitdeck::error::{AppError, Result};
use fitdeck::guidance::{ChatRequest, ChatResponse, GuidanceSource, LlmProvider};
use fitdeck::handlers::guidance::GuidanceState;

/// LLM provider that answers from a canned outcome and records every request.
pub struct MockProvider {
    outcome: std::result::Result<String, String>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn succeeding(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(text) => Ok(ChatResponse {
                content: text.clone(),
                model: "mock-model".to_string(),
            }),
            Err(message) => Err(AppError::Llm(message.clone())),
        }
    }
}

pub fn create_test_app(provider: Arc<MockProvider>) -> Router {
    fitdeck::routes::create_router(GuidanceState { provider })
}

pub async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// In-memory content platform keyed by query text.
#[derive(Default)]
pub struct FakeContent {
    responses: Mutex<HashMap<&'static str, std::result::Result<Value, String>>>,
    delay: Option<Duration>,
    pub requests: Mutex<Vec<QueryRequest>>,
}

impl FakeContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(self, query: &'static str, value: Value) -> Self {
        self.set(query, value);
        self
    }

    pub fn set(&self, query: &'static str, value: Value) {
        self.responses.lock().unwrap().insert(query, Ok(value));
    }

    pub fn fail(&self, query: &'static str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(query, Err(message.to_string()));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<QueryRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContentSource for FakeContent {
    async fn query(&self, request: &QueryRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        // answer with what was canned when the request arrived
        let response = self.responses.lock().unwrap().get(request.query).cloned();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match response {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(AppError::Content {
                status: 500,
                message,
            }),
            None => Err(AppError::Internal("no canned response".to_string())),
        }
    }
}

pub struct FakeGuidance {
    outcome: std::result::Result<String, String>,
    pub asked: Mutex<Vec<String>>,
}

impl FakeGuidance {
    pub fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            asked: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: Err("proxy down".to_string()),
            asked: Mutex::new(Vec::new()),
        })
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuidanceSource for FakeGuidance {
    async fn guidance(&self, exercise_name: &str) -> Result<String> {
        self.asked.lock().unwrap().push(exercise_name.to_string());
        self.outcome.clone().map_err(AppError::Llm)
    }
}

pub fn exercise_json(id: &str, name: &str, difficulty: &str) -> Value {
    serde_json::json!({
        "_id": id,
        "_type": "exercise",
        "name": name,
        "description": format!("How to perform {name} safely."),
        "difficulty": difficulty,
        "image": {
            "_type": "image",
            "asset": { "_ref": format!("image-{id}abc-640x480-jpg"), "_type": "reference" },
            "alt": name
        },
        "videoUrl": null,
        "isActive": true
    })
}

pub fn workout_json(id: &str, date: &str, duration: u64) -> Value {
    serde_json::json!({
        "_id": id,
        "date": date,
        "duration": duration,
        "exercises": [
            {
                "exercise": { "_id": "ex-1", "name": "Squat" },
                "sets": [
                    { "reps": 5, "weight": 80, "weightUnit": "kg", "_type": "set", "_key": "a" },
                    { "reps": 5, "weight": 85, "weightUnit": "kg", "_type": "set", "_key": "b" }
                ],
                "_type": "exerciseEntry",
                "_key": "e1"
            }
        ]
    })
}
