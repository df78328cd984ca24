//! Chat Completions client
//!
//! Non-streaming: one request, one `choices[0].message.content` back. Used by
//! the TUI when `provider = "openai"` and by `renki serve` as its upstream.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AiError, SYSTEM_INSTRUCTION};
use crate::config::ai_types::{OPENAI_API_KEY_ENV, OpenAiConfig};

const PROVIDER: &str = "OpenAI";

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &OpenAiConfig, timeout: Duration) -> Result<Self, AiError> {
        let api_key = config
            .resolved_api_key()
            .ok_or_else(|| AiError::NotConfigured {
                provider: PROVIDER.to_string(),
                message: format!(
                    "Missing API key. Set 'api_key' in the [ai.openai] section or export {}.",
                    OPENAI_API_KEY_ENV
                ),
            })?;

        Ok(Self::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
            timeout,
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Returns the first choice's content, empty when the model sent none
    pub async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, AiError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| AiError::Network {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(AiError::Api {
                provider: PROVIDER.to_string(),
                code: status.as_u16(),
                message: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| AiError::Parse {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
