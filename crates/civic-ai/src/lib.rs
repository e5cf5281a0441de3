//! Chat-completion types and the OpenAI-compatible HTTP client used by the
//! civic assistant.
mod openai;
mod types;

pub use openai::{OpenAiClient, OpenAiConfig, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_MS};
pub use types::{
    ChatRequest, ChatResponse, ChatUsage, CivicAiError, LlmClient, Message, MessageRole,
};
