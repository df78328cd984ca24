//! AI Worker Thread
//!
//! Handles suggestion requests in a background thread so typing never blocks
//! on the network. Receives requests via channel, calls the provider on a
//! current-thread tokio runtime and sends one response back per request.
//!
//! Includes panic handling so a crash inside the HTTP stack cannot corrupt the
//! TUI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::ai_state::{AiRequest, AiResponse};
use super::provider::{AiError, AsyncAiProvider};
use crate::config::ai_types::AiConfig;

const WORKER_THREAD_NAME: &str = "renki-ai-worker";

/// Spawn the AI worker thread
///
/// # Arguments
/// * `config` - AI configuration (for creating the provider)
/// * `request_rx` - Channel to receive requests from the main thread
/// * `response_tx` - Channel to send responses to the main thread
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let provider_result = AsyncAiProvider::from_config(config);

    install_worker_panic_hook();

    let spawned = std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let panic_tx = response_tx.clone();
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt.block_on(worker_loop(provider_result, request_rx, response_tx)),
                    Err(e) => log::error!("Failed to create tokio runtime: {}", e),
                }
            }));

            if let Err(e) = result {
                let message = panic_message(e.as_ref());
                log::error!("AI worker thread panicked: {}", message);
                // Id 0 is never issued; it fails whatever request is in flight
                let _ = panic_tx.send(AiResponse::Error {
                    message: format!("AI worker crashed: {}", message),
                    request_id: 0,
                });
            }
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn AI worker thread: {}", e);
    }
}

/// Wraps the current panic hook so panics on the worker thread are only
/// logged. The default hook prints to stderr, which would land on top of the
/// TUI. Panics on every other thread still reach the previous hook.
fn install_worker_panic_hook() {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if std::thread::current().name() == Some(WORKER_THREAD_NAME) {
            log::error!(
                "AI worker panic: {} at {:?}",
                panic_message(panic_info.payload()),
                panic_info.location()
            );
        } else {
            prev_hook(panic_info);
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Blocking `recv()` is fine here since this runs on a dedicated thread.
async fn worker_loop(
    provider_result: Result<AsyncAiProvider, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let provider = provider_result.map_err(|e| e.to_string());
    if let Err(e) = &provider {
        log::warn!("AI provider unavailable: {}", e);
    }

    while let Ok(request) = request_rx.recv() {
        match request {
            AiRequest::Query {
                prompt,
                temperature,
                request_id,
                cancel_token,
            } => {
                handle_query_async(
                    &provider,
                    &prompt,
                    temperature,
                    request_id,
                    cancel_token,
                    &response_tx,
                )
                .await;
            }
        }
    }
}

async fn handle_query_async(
    provider: &Result<AsyncAiProvider, String>,
    prompt: &str,
    temperature: f64,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: &Sender<AiResponse>,
) {
    if cancel_token.is_cancelled() {
        let _ = response_tx.send(AiResponse::Cancelled { request_id });
        return;
    }

    let provider = match provider {
        Ok(p) => p,
        Err(message) => {
            let _ = response_tx.send(AiResponse::Error {
                message: message.clone(),
                request_id,
            });
            return;
        }
    };

    #[cfg(debug_assertions)]
    log::debug!(
        "Request {} to {} ({} bytes, temperature {:.2})",
        request_id,
        provider.provider_name(),
        prompt.len(),
        temperature
    );

    let response = match provider
        .complete_with_cancel(prompt, temperature, cancel_token)
        .await
    {
        Ok(text) => AiResponse::Complete { text, request_id },
        Err(AiError::Cancelled) => AiResponse::Cancelled { request_id },
        Err(e) => {
            log::warn!("Request {} failed: {}", request_id, e);
            AiResponse::Error {
                message: e.to_string(),
                request_id,
            }
        }
    };
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
