use serde_json::{Value, json};

use crate::ai::{AiError, DEFAULT_TEMPERATURE, OpenAiClient, clamp_temperature};

pub const CHAT_PATH: &str = "/api/chat";

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Response to send back to the proxy client
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub status: u16,
    pub body: String,
    pub content_type: &'static str,
}

impl ChatReply {
    fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            body: value.to_string(),
            content_type: CONTENT_TYPE_JSON,
        }
    }

    fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: CONTENT_TYPE_TEXT,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }
}

/// Reads `temperature` the lenient way: numbers and numeric strings are used,
/// anything else falls back to the default. The result is clamped to [0, 1].
pub fn parse_temperature(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    clamp_temperature(raw.unwrap_or(DEFAULT_TEMPERATURE))
}

/// Handles one proxy request
///
/// `upstream` is `None` when the server has no API key.
pub async fn handle_chat(
    method: &str,
    path: &str,
    body: &str,
    upstream: Option<&OpenAiClient>,
) -> ChatReply {
    let path = path.split('?').next().unwrap_or(path);
    if path != CHAT_PATH {
        return ChatReply::text(404, "Not Found");
    }
    if !method.eq_ignore_ascii_case("POST") {
        return ChatReply::text(405, "Method Not Allowed");
    }

    let payload: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let prompt = match payload.get("prompt") {
        Some(Value::String(p)) if !p.is_empty() => p.as_str(),
        _ => return ChatReply::error(400, "Missing prompt"),
    };
    let temperature = parse_temperature(payload.get("temperature"));

    let Some(client) = upstream else {
        return ChatReply::error(500, "Server missing OPENAI_API_KEY");
    };

    match client.complete(prompt, temperature).await {
        Ok(content) => ChatReply::json(200, json!({ "content": content })),
        Err(AiError::Api { code, message, .. }) => ChatReply::text(code, message),
        Err(e) => {
            log::error!("Upstream request failed: {}", e);
            ChatReply::error(500, "Server error")
        }
    }
}

#[cfg(test)]
#[path = "chat_handler_tests.rs"]
mod chat_handler_tests;
