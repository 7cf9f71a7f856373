use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuidanceBody<'a> {
    exercise_name: &'a str,
}

#[derive(Deserialize)]
struct GuidanceReply {
    result: String,
}

#[async_trait]
pub trait GuidanceSource: Send + Sync {
    async fn guidance(&self, exercise_name: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct HttpGuidanceClient {
    http: Client,
    base_url: String,
}

impl HttpGuidanceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.guidance_url.clone())
    }
}

#[async_trait]
impl GuidanceSource for HttpGuidanceClient {
    async fn guidance(&self, exercise_name: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/api/ai", self.base_url))
            .json(&GuidanceBody { exercise_name })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!("Guidance proxy returned {status}: {message}")));
        }

        let reply: GuidanceReply = response.json().await?;
        Ok(reply.result)
    }
}
