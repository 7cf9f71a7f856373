use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::schema::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content platform error ({status}): {message}")]
    Content { status: u16, message: String },

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid asset reference: {0}")]
    InvalidAsset(String),

    #[error("Guidance generation failed")]
    GuidanceFailed,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub const GUIDANCE_FAILED_MESSAGE: &str = "Error generating exercise instructions";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Http(e) => {
                tracing::error!("Upstream HTTP error: {:?}", e);
                (StatusCode::BAD_GATEWAY, "Upstream error".to_string())
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
            AppError::Content { status, message } => {
                tracing::error!("Content platform error {}: {}", status, message);
                (StatusCode::BAD_GATEWAY, "Upstream error".to_string())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM provider error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Upstream error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::InvalidAsset(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::GuidanceFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GUIDANCE_FAILED_MESSAGE.to_string(),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
