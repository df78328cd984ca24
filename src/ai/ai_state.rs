//! Suggestion request state
//!
//! Tracks the loading flag, the last error and the channel handles used to
//! talk to the worker thread. Only one request is in flight at a time; its id
//! is the only one whose responses are applied.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    Query {
        prompt: String,
        /// Wildness, clamped again by the provider
        temperature: f64,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the AI worker thread
#[derive(Debug)]
pub enum AiResponse {
    /// Trimmed, non-empty suggestion text
    Complete { text: String, request_id: u64 },
    Error { message: String, request_id: u64 },
    Cancelled { request_id: u64 },
}

pub struct AiState {
    /// Whether a provider could be built from config
    pub configured: bool,
    pub provider_name: String,
    pub loading: bool,
    pub error: Option<String>,
    pub request_tx: Option<Sender<AiRequest>>,
    pub response_rx: Option<Receiver<AiResponse>>,
    /// Incremented for every request sent
    pub request_id: u64,
    pub in_flight_request_id: Option<u64>,
    current_cancel_token: Option<CancellationToken>,
}

impl AiState {
    pub fn new(configured: bool, provider_name: String) -> Self {
        Self {
            configured,
            provider_name,
            loading: false,
            error: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            current_cancel_token: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Send a request to the worker
    ///
    /// Returns false when there is no worker channel or it is closed; state
    /// is left untouched in that case.
    pub fn send_request(&mut self, prompt: String, temperature: f64) -> bool {
        let Some(tx) = self.request_tx.as_ref() else {
            return false;
        };

        let request_id = self.request_id + 1;
        let cancel_token = CancellationToken::new();
        let sent = tx
            .send(AiRequest::Query {
                prompt,
                temperature,
                request_id,
                cancel_token: cancel_token.clone(),
            })
            .is_ok();
        if !sent {
            return false;
        }

        self.request_id = request_id;
        self.in_flight_request_id = Some(request_id);
        self.current_cancel_token = Some(cancel_token);
        self.loading = true;
        self.error = None;
        true
    }

    /// True if `request_id` is the request currently awaited
    pub fn is_current(&self, request_id: u64) -> bool {
        self.in_flight_request_id == Some(request_id)
    }

    /// Marks the in-flight request finished
    pub fn finish_request(&mut self) {
        self.loading = false;
        self.in_flight_request_id = None;
        self.current_cancel_token = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.finish_request();
        self.error = Some(message);
    }

    /// Cancel any in-flight request
    ///
    /// Returns true if there was an in-flight request to cancel.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        if let Some(token) = self.current_cancel_token.take() {
            log::debug!(
                "Cancelling in-flight request {:?}",
                self.in_flight_request_id
            );
            token.cancel();
            self.in_flight_request_id = None;
            self.loading = false;
            return true;
        }
        false
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
