use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::{fetch, ContentQuery, ContentSource, ImageUrl, QueryRequest};
use crate::config::{Config, ContentConfig};
use crate::error::{AppError, Result};
use crate::schema::WorkoutDraft;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

#[derive(Deserialize)]
struct MutateResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Deserialize)]
struct MutationResult {
    id: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    description: Option<String>,
}

#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    config: ContentConfig,
    token: Option<String>,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            token: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.content.clone())
    }

    pub fn privileged(&self, token: impl Into<String>) -> Self {
        let mut config = self.config.clone();
        config.use_cdn = false;
        Self {
            http: self.http.clone(),
            config,
            token: Some(token.into()),
        }
    }

    pub fn admin(&self) -> Option<Self> {
        self.config.token.as_deref().map(|token| self.privileged(token))
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn is_privileged(&self) -> bool {
        self.token.is_some()
    }

    fn base_url(&self) -> String {
        if let Some(base) = &self.config.api_base {
            return base.trim_end_matches('/').to_string();
        }
        let host = if self.config.use_cdn { "apicdn" } else { "api" };
        format!("https://{}.{}.sanity.io", self.config.project_id, host)
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v{}/data/{}/{}",
            self.base_url(),
            self.config.api_version,
            action,
            self.config.dataset
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn fetch<Q>(&self, query: &Q) -> Result<Q::Output>
    where
        Q: ContentQuery + Sync,
    {
        fetch(self, query).await
    }

    pub fn image_url(&self, asset_ref: &str) -> Result<ImageUrl> {
        ImageUrl::parse(&self.config.project_id, &self.config.dataset, asset_ref)
    }

    pub async fn create_workout(&self, draft: &WorkoutDraft) -> Result<String> {
        if !self.is_privileged() {
            return Err(AppError::Unauthorized(
                "Creating documents requires a write token".to_string(),
            ));
        }

        let body = json!({ "mutations": [ { "create": draft.to_document() } ] });
        let request = self
            .http
            .post(self.endpoint("mutate"))
            .query(&[("returnIds", "true")])
            .json(&body);

        tracing::debug!("Creating workout for user {}", draft.user_id());
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(content_error(status, &text));
        }

        let parsed: MutateResponse = serde_json::from_str(&text)?;
        let id = parsed
            .results
            .into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| AppError::Internal("Mutation returned no document id".to_string()))?;

        tracing::info!("Created workout {}", id);
        Ok(id)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn query(&self, request: &QueryRequest) -> Result<Value> {
        let mut pairs = vec![("query".to_string(), request.query.to_string())];
        for (name, value) in &request.params {
            pairs.push((format!("${name}"), serde_json::to_string(value)?));
        }

        tracing::debug!(
            "Content query with {} parameter(s) against {}",
            request.params.len(),
            self.config.dataset
        );

        let http_request = self.http.get(self.endpoint("query")).query(&pairs);
        let response = self.authorize(http_request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(content_error(status, &text));
        }

        let parsed: QueryResponse = serde_json::from_str(&text)?;
        Ok(parsed.result)
    }
}

fn content_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.and_then(|e| e.description).or(b.message))
        .unwrap_or_else(|| body.chars().take(200).collect());

    tracing::error!("Content platform returned {}: {}", status, message);
    AppError::Content {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(use_cdn: bool) -> ContentClient {
        ContentClient::new(ContentConfig {
            project_id: "proj".to_string(),
            use_cdn,
            ..ContentConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_uses_api_host() {
        assert_eq!(
            client(false).endpoint("query"),
            "https://proj.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_endpoint_uses_cdn_host() {
        assert_eq!(
            client(true).endpoint("query"),
            "https://proj.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_privileged_bypasses_cdn() {
        let admin = client(true).privileged("secret");

        assert!(admin.is_privileged());
        assert_eq!(
            admin.endpoint("mutate"),
            "https://proj.api.sanity.io/v2024-01-01/data/mutate/production"
        );
    }

    #[test]
    fn test_admin_requires_configured_token() {
        assert!(client(false).admin().is_none());

        let with_token = ContentClient::new(ContentConfig {
            token: Some("secret".to_string()),
            ..ContentConfig::default()
        })
        .unwrap();
        assert!(with_token.admin().is_some_and(|c| c.is_privileged()));
    }

    #[test]
    fn test_error_body_description_is_surfaced() {
        let body = r#"{"error":{"description":"Query parse error","type":"queryParseError"}}"#;
        match content_error(StatusCode::BAD_REQUEST, body) {
            AppError::Content { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Query parse error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
