//! Client for the JSON suggestion proxy
//!
//! `POST {url}` with `{"prompt": ..., "temperature": ...}`; the answer is a
//! JSON object carrying the text in `content` (or `text`).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AiError;

const PROVIDER: &str = "Proxy";

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    prompt: &'a str,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ProxyResponse {
    content: Option<String>,
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    url: String,
}

impl ProxyClient {
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw text from the proxy, possibly empty
    pub async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, AiError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ProxyRequest {
                prompt,
                temperature,
            })
            .send()
            .await
            .map_err(|e| AiError::Network {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AiError::Network {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(AiError::Api {
                provider: PROVIDER.to_string(),
                code: status.as_u16(),
                message: body,
            });
        }

        let parsed: ProxyResponse = serde_json::from_str(&body).map_err(|e| AiError::Parse {
            provider: PROVIDER.to_string(),
            message: e.to_string(),
        })?;

        Ok(parsed.content.or(parsed.text).unwrap_or_default())
    }
}
