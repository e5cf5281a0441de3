use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{ChatRequest, ChatResponse, ChatUsage, CivicAiError, LlmClient, Message};

pub const DEFAULT_API_BASE: &str = "https://api.moonshot.ai/v1";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
/// Public struct `OpenAiConfig` used across civic components.
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone)]
/// Single-attempt client for `POST {api_base}/chat/completions`.
///
/// Non-2xx statuses, transport failures, timeouts, and bodies without a text
/// completion all surface as `CivicAiError`; nothing is retried.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, CivicAiError> {
        if config.api_key.trim().is_empty() {
            return Err(CivicAiError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|e| {
                CivicAiError::InvalidResponse(format!("invalid API key header: {e}"))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()?;

        Ok(Self { client, config })
    }

    fn chat_completions_url(&self) -> String {
        let base = self.config.api_base.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            return base.to_string();
        }

        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, CivicAiError> {
        let body = build_chat_request_body(&request);
        let url = self.chat_completions_url();
        let request_id = new_request_id();

        tracing::debug!(
            model = request.model.as_str(),
            messages = request.messages.len(),
            request_id = request_id.as_str(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-civic-request-id", request_id)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            return Err(CivicAiError::HttpStatus {
                status: status.as_u16(),
                body: raw,
            });
        }

        parse_chat_response(&raw)
    }
}

fn new_request_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let count = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("civic-rs-{millis}-{count}")
}

fn build_chat_request_body(request: &ChatRequest) -> Value {
    let messages: Vec<Value> = request
        .messages
        .iter()
        .map(|message| {
            json!({
                "role": message.role.as_str(),
                "content": message.content,
            })
        })
        .collect();

    let mut body = json!({
        "model": request.model,
        "messages": messages,
    });

    if let Some(max_tokens) = request.max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }
    if let Some(temperature) = request.temperature {
        body["temperature"] = json!(temperature);
    }

    body
}

fn parse_chat_response(raw: &str) -> Result<ChatResponse, CivicAiError> {
    let parsed: OpenAiChatResponse = serde_json::from_str(raw)?;
    let choice =
        parsed.choices.into_iter().next().ok_or_else(|| {
            CivicAiError::InvalidResponse("response contained no choices".to_string())
        })?;

    let text = extract_text_content(choice.message.content.as_ref());
    if text.trim().is_empty() {
        return Err(CivicAiError::InvalidResponse(
            "response contained no text completion".to_string(),
        ));
    }

    let usage = parsed
        .usage
        .map(|usage| ChatUsage {
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        })
        .unwrap_or_default();

    Ok(ChatResponse {
        message: Message::assistant_text(text),
        finish_reason: choice.finish_reason,
        usage,
    })
}

// Some compatible providers return content as an array of typed parts.
fn extract_text_content(content: Option<&Value>) -> String {
    match content {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| {
                let object = part.as_object()?;
                let kind = object.get("type").and_then(Value::as_str).unwrap_or("text");
                if kind != "text" {
                    return None;
                }
                object.get("text").and_then(Value::as_str)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}
