use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::guidance::{guidance_request, LlmProvider};

pub const MISSING_NAME_MESSAGE: &str = "Exercise name is required";

#[derive(Clone)]
pub struct GuidanceState {
    pub provider: Arc<dyn LlmProvider>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRequest {
    #[serde(default)]
    pub exercise_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuidanceResponse {
    pub result: String,
}

pub async fn generate(
    State(state): State<GuidanceState>,
    body: Bytes,
) -> Result<Json<GuidanceResponse>> {
    // parsed by hand so every malformed body gets the same 400
    let request: GuidanceRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest(MISSING_NAME_MESSAGE.to_string()))?;

    // blank names are rejected, but the prompt gets the name exactly as sent
    let exercise_name = request
        .exercise_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_NAME_MESSAGE.to_string()))?;

    tracing::info!(
        "Generating guidance for {} via {}",
        exercise_name,
        state.provider.name()
    );

    match state.provider.complete(&guidance_request(&exercise_name)).await {
        Ok(response) => {
            tracing::debug!("Guidance generated by model {}", response.model);
            Ok(Json(GuidanceResponse {
                result: response.content,
            }))
        }
        Err(e) => {
            tracing::error!("Error generating exercise instructions: {}", e);
            Err(AppError::GuidanceFailed)
        }
    }
}
