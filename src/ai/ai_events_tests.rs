//! Tests for AI response polling

use super::*;
use std::sync::mpsc;

use crate::ai::ai_state::AiRequest;

fn connected_state() -> (AiState, mpsc::Receiver<AiRequest>, mpsc::Sender<AiResponse>) {
    let mut state = AiState::new(true, "Proxy".to_string());
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    state.set_channels(request_tx, response_rx);
    (state, request_rx, response_tx)
}

#[test]
fn test_poll_without_channel_is_empty() {
    let mut state = AiState::new(false, "Proxy".to_string());
    assert!(poll_response_channel(&mut state).is_empty());
}

#[test]
fn test_completion_for_current_request() {
    let (mut state, _requests, tx) = connected_state();
    state.send_request("p".to_string(), 0.7);

    tx.send(AiResponse::Complete {
        text: "shimmer, gleam".to_string(),
        request_id: 1,
    })
    .unwrap();

    assert_eq!(
        poll_response_channel(&mut state),
        vec![RequestOutcome::Suggestion("shimmer, gleam".to_string())]
    );
    assert!(!state.loading);
}

#[test]
fn test_stale_completion_is_dropped() {
    let (mut state, _requests, tx) = connected_state();
    state.send_request("first".to_string(), 0.7);
    state.finish_request();
    state.send_request("second".to_string(), 0.7);

    tx.send(AiResponse::Complete {
        text: "old".to_string(),
        request_id: 1,
    })
    .unwrap();

    assert!(poll_response_channel(&mut state).is_empty());
    assert!(state.loading);
}

#[test]
fn test_error_for_current_request() {
    let (mut state, _requests, tx) = connected_state();
    state.send_request("p".to_string(), 0.7);

    tx.send(AiResponse::Error {
        message: "[Proxy] API error (500): boom".to_string(),
        request_id: 1,
    })
    .unwrap();

    let outcomes = poll_response_channel(&mut state);
    assert_eq!(
        outcomes,
        vec![RequestOutcome::Failed(
            "[Proxy] API error (500): boom".to_string()
        )]
    );
    assert_eq!(state.error.as_deref(), Some("[Proxy] API error (500): boom"));
    assert!(!state.loading);
}

#[test]
fn test_worker_crash_fails_in_flight_request() {
    let (mut state, _requests, tx) = connected_state();
    state.send_request("p".to_string(), 0.7);

    tx.send(AiResponse::Error {
        message: "AI worker crashed: oops".to_string(),
        request_id: 0,
    })
    .unwrap();

    assert_eq!(poll_response_channel(&mut state).len(), 1);
    assert!(!state.loading);
}

#[test]
fn test_cancelled_current_request() {
    let (mut state, _requests, tx) = connected_state();
    state.send_request("p".to_string(), 0.7);
    tx.send(AiResponse::Cancelled { request_id: 1 }).unwrap();

    assert_eq!(
        poll_response_channel(&mut state),
        vec![RequestOutcome::Cancelled]
    );
}

#[test]
fn test_disconnect_while_loading_is_failure() {
    let (mut state, _requests, tx) = connected_state();
    state.send_request("p".to_string(), 0.7);
    drop(tx);

    let outcomes = poll_response_channel(&mut state);
    assert!(matches!(outcomes.as_slice(), [RequestOutcome::Failed(_)]));
    assert!(!state.loading);
}

#[test]
fn test_disconnect_while_idle_is_silent() {
    let (mut state, _requests, tx) = connected_state();
    drop(tx);
    assert!(poll_response_channel(&mut state).is_empty());
}
