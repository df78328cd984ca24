//! AI response polling
//!
//! Drains the worker's response channel once per event-loop tick and turns
//! the responses that belong to the in-flight request into outcomes for the
//! app to apply. Responses for any other request id are dropped.

use std::sync::mpsc::TryRecvError;

use super::ai_state::{AiResponse, AiState};

/// Result of the in-flight request, as seen by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Suggestion(String),
    Failed(String),
    Cancelled,
}

/// Poll the response channel for incoming AI responses
///
/// Uses try_recv() for non-blocking polling.
pub fn poll_response_channel(ai_state: &mut AiState) -> Vec<RequestOutcome> {
    let mut responses = Vec::new();
    let mut disconnected = false;

    if let Some(ref rx) = ai_state.response_rx {
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
    }

    let mut outcomes: Vec<RequestOutcome> = responses
        .into_iter()
        .filter_map(|response| process_response(ai_state, response))
        .collect();

    if disconnected && ai_state.loading {
        let message = "AI worker disconnected unexpectedly".to_string();
        ai_state.set_error(message.clone());
        outcomes.push(RequestOutcome::Failed(message));
    }

    outcomes
}

/// Process a single AI response message
///
/// Returns None for responses to requests that are no longer awaited.
pub fn process_response(ai_state: &mut AiState, response: AiResponse) -> Option<RequestOutcome> {
    match response {
        AiResponse::Complete { text, request_id } => {
            if !ai_state.is_current(request_id) {
                log::debug!(
                    "Ignoring stale completion from request {} (in flight: {:?})",
                    request_id,
                    ai_state.in_flight_request_id
                );
                return None;
            }
            ai_state.finish_request();
            Some(RequestOutcome::Suggestion(text))
        }
        AiResponse::Error {
            message,
            request_id,
        } => {
            // Id 0 comes from a crashed worker and fails whatever is in flight
            let applies = ai_state.is_current(request_id)
                || (request_id == 0 && ai_state.has_in_flight_request());
            if !applies {
                log::debug!("Ignoring stale error from request {}", request_id);
                return None;
            }
            ai_state.set_error(message.clone());
            Some(RequestOutcome::Failed(message))
        }
        AiResponse::Cancelled { request_id } => {
            log::debug!("Request {} cancelled", request_id);
            if !ai_state.is_current(request_id) {
                return None;
            }
            ai_state.finish_request();
            Some(RequestOutcome::Cancelled)
        }
    }
}

#[cfg(test)]
#[path = "ai_events_tests.rs"]
mod ai_events_tests;
