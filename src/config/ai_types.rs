// AI configuration type definitions

use serde::Deserialize;

/// Environment variable consulted when `[ai.openai] api_key` is unset
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

fn default_proxy_url() -> String {
    "http://127.0.0.1:8787/api/chat".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Where suggestion requests go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    /// A `renki serve` style proxy endpoint
    #[default]
    Proxy,
    /// The chat-completion API directly
    OpenAi,
}

/// Proxy endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyEndpointConfig {
    #[serde(default = "default_proxy_url")]
    pub url: String,
}

impl Default for ProxyEndpointConfig {
    fn default() -> Self {
        ProxyEndpointConfig {
            url: default_proxy_url(),
        }
    }
}

/// OpenAI-specific configuration, shared by the direct provider and the proxy
/// server
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_key: None,
            model: default_openai_model(),
            base_url: default_openai_base_url(),
        }
    }
}

impl OpenAiConfig {
    /// Configured key, falling back to `OPENAI_API_KEY`. Blank keys count as
    /// missing.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// AI section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProviderType,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub proxy: ProxyEndpointConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            provider: AiProviderType::default(),
            timeout_secs: default_timeout_secs(),
            proxy: ProxyEndpointConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "ai_types_tests.rs"]
mod ai_types_tests;
