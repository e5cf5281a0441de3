use civic_ai::{ChatUsage, CivicAiError, Message};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `TurnRole` values.
pub enum TurnRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One prior exchange supplied by the caller; the server keeps no history.
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }

    pub(crate) fn to_message(&self) -> Message {
        match self.role {
            TurnRole::User => Message::user(self.content.clone()),
            TurnRole::Assistant => Message::assistant_text(self.content.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Inbound chat request. A missing `message` decodes as empty and is rejected
/// by the assistant rather than by the decoder.
pub struct GatewayRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "wardId")]
    pub district_id: Option<i64>,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl GatewayRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_district(mut self, district_id: i64) -> Self {
        self.district_id = Some(district_id);
        self
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Which path produced the answer.
pub enum ResponseSource {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "local-fallback")]
    LocalFallback,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Why the local rule table answered instead of the remote model.
pub enum FallbackReason {
    NoCredential,
    RemoteStatus,
    RemoteTransport,
    RemoteMalformed,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoCredential => "no_credential",
            Self::RemoteStatus => "remote_status",
            Self::RemoteTransport => "remote_transport",
            Self::RemoteMalformed => "remote_malformed",
        }
    }

    pub(crate) fn from_remote_error(error: &CivicAiError) -> Self {
        match error {
            CivicAiError::HttpStatus { .. } => Self::RemoteStatus,
            CivicAiError::Http(_) => Self::RemoteTransport,
            CivicAiError::Serde(_) | CivicAiError::InvalidResponse(_) => Self::RemoteMalformed,
            CivicAiError::MissingApiKey => Self::NoCredential,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub message: String,
    pub citations: Vec<Citation>,
    pub source: ResponseSource,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ChatUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_status: Option<u16>,
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Enumerates supported `AssistantError` values.
pub enum AssistantError {
    #[error("message is required")]
    EmptyMessage,
}
