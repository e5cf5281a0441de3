//! Civic assistant: grounds a user message in ward data, asks the remote chat
//! model, and answers from a local keyword rule table whenever the model is
//! unconfigured or fails.

mod assistant;
mod citations;
mod config;
mod fallback;
mod grounding;
mod types;

pub use assistant::CivicAssistant;
pub use citations::{build_citations, DATASET_CITATION_SNIPPET, DATASET_CITATION_TITLE};
pub use config::{
    AssistantConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    FALLBACK_MODEL_ID,
};
pub use fallback::local_fallback;
pub use grounding::{build_grounding_context, build_system_prompt};
pub use types::{
    AssistantError, Citation, ConversationTurn, FallbackReason, GatewayRequest, GatewayResponse,
    ResponseSource, TurnRole,
};
