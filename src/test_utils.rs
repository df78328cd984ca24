//! Shared test utilities for renki
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::Read;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread;
    use std::time::Duration;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::ai::{AiRequest, AiResponse};
    use crate::app::App;
    use crate::config::Config;
    use crate::settings::Settings;

    /// Helper to create App with default config and settings for tests
    pub fn test_app() -> App {
        App::new(&Config::default(), Settings::default(), "")
    }

    /// Helper to create App with initial lyrics
    pub fn app_with_lyrics(text: &str) -> App {
        App::new(&Config::default(), Settings::default(), text)
    }

    /// App wired to in-test channels instead of a worker thread
    ///
    /// Returns the app, the receiving end of its requests and the sending
    /// end for responses.
    pub fn app_with_channels(text: &str) -> (App, Receiver<AiRequest>, Sender<AiResponse>) {
        let mut app = app_with_lyrics(text);
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.ai.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Prompt and id of the next request the app sent
    pub fn take_request(rx: &Receiver<AiRequest>) -> (String, u64) {
        match rx.try_recv().expect("app sent no request") {
            AiRequest::Query {
                prompt, request_id, ..
            } => (prompt, request_id),
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Types `text` into the focused pane one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            app.handle_key_event(key(code));
        }
    }

    /// A request seen by [`MockBackend`]
    #[derive(Debug, Clone)]
    pub struct CapturedRequest {
        pub method: String,
        pub path: String,
        pub body: String,
        pub authorization: Option<String>,
    }

    /// Local HTTP server answering every request with a fixed status and body
    pub struct MockBackend {
        /// Base URL without trailing slash, e.g. `http://127.0.0.1:40123`
        pub url: String,
        pub requests: Receiver<CapturedRequest>,
        stop_tx: Sender<()>,
    }

    impl MockBackend {
        /// Waits for the next request the server received
        pub fn next_request(&self) -> CapturedRequest {
            self.requests
                .recv_timeout(Duration::from_secs(5))
                .expect("mock backend received no request")
        }
    }

    impl Drop for MockBackend {
        fn drop(&mut self) {
            let _ = self.stop_tx.send(());
        }
    }

    pub fn start_mock_backend(status: u16, body: &str) -> MockBackend {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to start test server");
        let port = server.server_addr().to_ip().unwrap().port();
        let url = format!("http://127.0.0.1:{}", port);

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (request_tx, request_rx) = mpsc::channel::<CapturedRequest>();
        let body = body.to_string();

        thread::spawn(move || {
            loop {
                if stop_rx.try_recv().is_ok() {
                    break;
                }

                match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(mut request)) => {
                        let mut received = String::new();
                        let _ = request.as_reader().read_to_string(&mut received);
                        let authorization = request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv("Authorization"))
                            .map(|h| h.value.as_str().to_string());
                        let _ = request_tx.send(CapturedRequest {
                            method: request.method().as_str().to_string(),
                            path: request.url().to_string(),
                            body: received,
                            authorization,
                        });

                        let response = tiny_http::Response::from_string(body.clone())
                            .with_status_code(status)
                            .with_header(
                                tiny_http::Header::from_bytes(
                                    &b"Content-Type"[..],
                                    &b"application/json"[..],
                                )
                                .unwrap(),
                            );
                        let _ = request.respond(response);
                    }
                    Ok(None) => {}
                    Err(_) => break,
                }
            }
        });

        MockBackend {
            url,
            requests: request_rx,
            stop_tx,
        }
    }
}
