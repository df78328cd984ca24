//! Suggestion backend for renki
//!
//! Builds prompts, talks to the configured provider on a worker thread and
//! hands finished suggestions back to the event loop.

pub mod ai_events;
pub mod ai_state;
pub mod prompt;
mod provider;
pub mod worker;

pub use ai_events::RequestOutcome;
pub use ai_state::{AiRequest, AiResponse, AiState};
pub use provider::{
    AiError, AsyncAiProvider, DEFAULT_TEMPERATURE, OpenAiClient, SYSTEM_INSTRUCTION,
    clamp_temperature,
};
