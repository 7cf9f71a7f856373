use std::env;

pub const DEFAULT_PROJECT_ID: &str = "0rrv9glg";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-01-01";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
    pub api_base: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: false,
            token: None,
            api_base: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub content: ContentConfig,
    pub llm: LlmConfig,
    // base URL handed to HttpGuidanceClient::from_config
    pub guidance_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000);

        Self {
            content: ContentConfig {
                project_id: var("SANITY_PROJECT_ID")
                    .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
                dataset: var("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
                api_version: var("SANITY_API_VERSION")
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
                // only the literal "true" turns the CDN on
                use_cdn: var("SANITY_USE_CDN").as_deref() == Some("true"),
                token: var("SANITY_API_TOKEN"),
                api_base: var("SANITY_API_BASE"),
            },
            llm: LlmConfig {
                api_key: var("OPENAI_API_KEY"),
                base_url: var("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            },
            guidance_url: var("GUIDANCE_URL")
                .unwrap_or_else(|| format!("http://{}:{}", host, port)),
            host,
            port,
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.content.project_id, DEFAULT_PROJECT_ID);
        assert_eq!(config.content.dataset, "production");
        assert_eq!(config.content.api_version, "2024-01-01");
        assert!(!config.content.use_cdn);
        assert!(config.content.token.is_none());
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        assert_eq!(config.guidance_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_cdn_only_enabled_by_literal_true() {
        let on = Config::from_lookup(lookup_from(&[("SANITY_USE_CDN", "true")]));
        let off = Config::from_lookup(lookup_from(&[("SANITY_USE_CDN", "1")]));
        let upper = Config::from_lookup(lookup_from(&[("SANITY_USE_CDN", "TRUE")]));

        assert!(on.content.use_cdn);
        assert!(!off.content.use_cdn);
        assert!(!upper.content.use_cdn);
    }

    #[test]
    fn test_overrides_and_bad_port() {
        let config = Config::from_lookup(lookup_from(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_API_TOKEN", "secret"),
            ("OPENAI_API_KEY", ""),
            ("PORT", "not-a-port"),
            ("GUIDANCE_URL", "https://coach.example.com"),
        ]));

        assert_eq!(config.content.project_id, "abc123");
        assert_eq!(config.content.token.as_deref(), Some("secret"));
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.port, 3000);
        assert_eq!(config.guidance_url, "https://coach.example.com");
    }
}
