//! Backend proxy (`renki serve`)
//!
//! Holds the API credential server-side and forwards prompts from the TUI to
//! the chat-completion API.

mod chat_handler;
mod proxy_server;

pub use chat_handler::{CHAT_PATH, ChatReply, handle_chat, parse_temperature};
pub use proxy_server::{ProxyServer, serve};
