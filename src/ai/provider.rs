//! AI provider abstraction
//!
//! Defines the AsyncAiProvider enum, AiError types, and factory for creating provider instances.
//! Requests are single-shot (no streaming) and raced against a CancellationToken.

use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::ai_types::{AiConfig, AiProviderType};

mod openai_client;
mod proxy_client;

pub use openai_client::OpenAiClient;
pub use proxy_client::ProxyClient;

/// System instruction for the chat model. Shared by the direct provider and
/// the proxy server so both produce the same kind of output.
pub const SYSTEM_INSTRUCTION: &str = "Analyse the given text and make very short suggestions. \
Do not explain anything. Do not use headings. \
Do not start lines with numbers or bullet dashes. \
Return 1-4 suggestions without any preamble.";

/// Wildness used when a request carries no usable temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    /// Provider cannot be built (missing API key, bad URL)
    #[error("[{provider}] AI not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Transport failure, including timeouts
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// Non-success HTTP status; `message` is the response body
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse the response
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },

    /// The backend answered with no text
    #[error("[{provider}] Empty response")]
    EmptyResponse { provider: String },

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// Clamps a temperature into `[0, 1]`; NaN becomes 0.
pub fn clamp_temperature(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Async AI provider implementations with cancellation support
#[derive(Debug, Clone)]
pub enum AsyncAiProvider {
    /// JSON proxy endpoint (`renki serve` or compatible)
    Proxy(ProxyClient),
    /// Chat-completion API called directly
    OpenAi(OpenAiClient),
}

impl AsyncAiProvider {
    /// Returns the display name of the provider
    pub fn provider_name(&self) -> &'static str {
        match self {
            AsyncAiProvider::Proxy(_) => "Proxy",
            AsyncAiProvider::OpenAi(_) => "OpenAI",
        }
    }

    /// Create an async AI provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        match config.provider {
            AiProviderType::Proxy => {
                let url = config.proxy.url.trim();
                if url.is_empty() {
                    return Err(AiError::NotConfigured {
                        provider: "Proxy".to_string(),
                        message: "Missing url. Set 'url' in the [ai.proxy] section.".to_string(),
                    });
                }
                let client = ProxyClient::new(url.to_string(), timeout);
                log::info!("Suggestions via proxy at {}", client.url());
                Ok(AsyncAiProvider::Proxy(client))
            }
            AiProviderType::OpenAi => {
                let client = OpenAiClient::from_config(&config.openai, timeout)?;
                log::info!("Suggestions via OpenAI model {}", client.model());
                Ok(AsyncAiProvider::OpenAi(client))
            }
        }
    }

    /// Send one prompt and wait for the whole answer, unless cancelled first
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed, non-empty suggestion text
    /// * `Err(AiError::EmptyResponse)` - The backend returned only whitespace
    /// * `Err(AiError::Cancelled)` - Request was cancelled
    /// * `Err(AiError::*)` - Other errors
    pub async fn complete_with_cancel(
        &self,
        prompt: &str,
        temperature: f64,
        cancel_token: CancellationToken,
    ) -> Result<String, AiError> {
        if cancel_token.is_cancelled() {
            return Err(AiError::Cancelled);
        }

        let temperature = clamp_temperature(temperature);
        let request = async {
            match self {
                AsyncAiProvider::Proxy(client) => client.complete(prompt, temperature).await,
                AsyncAiProvider::OpenAi(client) => client.complete(prompt, temperature).await,
            }
        };

        let text = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("{} request cancelled", self.provider_name());
                return Err(AiError::Cancelled);
            }

            result = request => result?,
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::EmptyResponse {
                provider: self.provider_name().to_string(),
            });
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
