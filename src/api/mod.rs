//! Clients for the external services studymate relies on, and the HTTP
//! proxy that exposes them.
//!
//! - [`chat`]: OpenAI-compatible chat completion client
//! - [`quote`]: random quote client with built-in fallbacks
//! - [`server`]: `axum` router serving both behind permissive CORS

pub mod chat;
pub mod quote;
pub mod server;

pub use chat::{Chat, ChatConfig};
pub use quote::{Quote, QuoteConfig, Quotes};
