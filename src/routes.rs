use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{guidance, health};

pub fn create_router(guidance_state: guidance::GuidanceState) -> Router {
    Router::new()
        .route("/api/ai", post(guidance::generate))
        .with_state(guidance_state)
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
}
