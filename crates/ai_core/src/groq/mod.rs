//! Groq chat-completions client
//!
//! Groq exposes an OpenAI-compatible API, so the wire types here follow the
//! `/chat/completions` contract.

mod client;

pub use client::GroqCompletionClient;
