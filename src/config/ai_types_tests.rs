//! Tests for ai_types

use super::*;
use crate::config::Config;

#[test]
fn test_default_ai_config() {
    let config = AiConfig::default();
    assert_eq!(config.provider, AiProviderType::Proxy);
    assert_eq!(config.proxy.url, "http://127.0.0.1:8787/api/chat");
    assert_eq!(config.openai.model, "gpt-4o");
    assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(config.timeout_secs, 60);
}

#[test]
fn test_parse_openai_provider() {
    let toml = r#"
[ai]
provider = "openai"

[ai.openai]
api_key = "sk-test"
model = "gpt-4o-mini"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.ai.provider, AiProviderType::OpenAi);
    assert_eq!(config.ai.openai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.ai.openai.model, "gpt-4o-mini");
    assert_eq!(config.ai.openai.base_url, "https://api.openai.com/v1");
}

#[test]
fn test_parse_proxy_url() {
    let toml = r#"
[ai.proxy]
url = "https://lyrics.example.com/api/chat"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.ai.provider, AiProviderType::Proxy);
    assert_eq!(config.ai.proxy.url, "https://lyrics.example.com/api/chat");
}

#[test]
fn test_unknown_provider_is_rejected() {
    let toml = r#"
[ai]
provider = "bedrock"
"#;
    assert!(toml::from_str::<Config>(toml).is_err());
}

#[test]
fn test_configured_key_wins_over_environment() {
    let config = OpenAiConfig {
        api_key: Some("sk-from-file".to_string()),
        ..OpenAiConfig::default()
    };
    assert_eq!(config.resolved_api_key().as_deref(), Some("sk-from-file"));
}

#[test]
fn test_blank_configured_key_is_missing() {
    let config = OpenAiConfig {
        api_key: Some("   ".to_string()),
        ..OpenAiConfig::default()
    };
    assert_eq!(config.resolved_api_key(), None);
}
