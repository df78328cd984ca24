use std::net::SocketAddr;
use std::time::Duration;

use tiny_http::{Header, Request, Response, Server};

use super::chat_handler::{ChatReply, handle_chat};
use crate::ai::OpenAiClient;
use crate::config::ai_types::AiConfig;
use crate::error::RenkiError;

/// Blocking HTTP server answering `POST /api/chat`
pub struct ProxyServer {
    server: Server,
    upstream: Option<OpenAiClient>,
}

impl ProxyServer {
    pub fn bind(listen: &str, ai: &AiConfig) -> Result<Self, RenkiError> {
        let server = Server::http(listen).map_err(|e| RenkiError::ProxyBind {
            addr: listen.to_string(),
            message: e.to_string(),
        })?;

        let upstream =
            match OpenAiClient::from_config(&ai.openai, Duration::from_secs(ai.timeout_secs)) {
                Ok(client) => Some(client),
                Err(e) => {
                    log::warn!("{}; every request will fail with 500", e);
                    None
                }
            };

        Ok(Self { server, upstream })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serves requests one at a time until the listener shuts down
    pub fn run(self) -> Result<(), RenkiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        for mut request in self.server.incoming_requests() {
            let mut body = String::new();
            if let Err(e) = request.as_reader().read_to_string(&mut body) {
                log::warn!("Failed to read request body: {}", e);
                body.clear();
            }

            let reply = runtime.block_on(handle_chat(
                request.method().as_str(),
                request.url(),
                &body,
                self.upstream.as_ref(),
            ));
            respond(request, reply);
        }
        Ok(())
    }
}

fn respond(request: Request, reply: ChatReply) {
    let method = request.method().to_string();
    let url = request.url().to_string();
    log::info!("{} {} -> {}", method, url, reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        response = response.with_header(header);
    }
    if let Err(e) = request.respond(response) {
        log::warn!("Failed to answer {} {}: {}", method, url, e);
    }
}

/// Runs the proxy on `listen` until the process is stopped
pub fn serve(listen: &str, ai: &AiConfig) -> Result<(), RenkiError> {
    let server = ProxyServer::bind(listen, ai)?;
    match server.local_addr() {
        Some(addr) => log::info!("Listening on http://{}/api/chat", addr),
        None => log::info!("Listening on {}", listen),
    }
    server.run()
}
