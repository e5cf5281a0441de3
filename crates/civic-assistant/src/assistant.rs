use std::sync::Arc;

use civic_ai::{ChatRequest, ChatResponse, LlmClient, Message};
use civic_directory::WardDirectory;

use crate::citations::build_citations;
use crate::config::{AssistantConfig, FALLBACK_MODEL_ID};
use crate::fallback::local_fallback;
use crate::grounding::build_system_prompt;
use crate::types::{
    AssistantError, ConversationTurn, FallbackReason, GatewayRequest, GatewayResponse,
    ResponseSource,
};

#[derive(Clone)]
/// Stateless chat entry point shared by every request.
///
/// Without a client the assistant always answers from the local rule table.
pub struct CivicAssistant {
    directory: Arc<WardDirectory>,
    client: Option<Arc<dyn LlmClient>>,
    config: AssistantConfig,
}

impl CivicAssistant {
    pub fn new(
        directory: Arc<WardDirectory>,
        client: Option<Arc<dyn LlmClient>>,
        config: AssistantConfig,
    ) -> Self {
        Self {
            directory,
            client,
            config,
        }
    }

    pub fn directory(&self) -> &Arc<WardDirectory> {
        &self.directory
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn remote_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn handle(&self, request: GatewayRequest) -> Result<GatewayResponse, AssistantError> {
        if request.message.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let Some(client) = self.client.as_ref() else {
            tracing::debug!(
                district_id = request.district_id,
                "no remote credential configured; answering locally"
            );
            return Ok(self.fallback_response(&request, FallbackReason::NoCredential, None));
        };

        let system_prompt = build_system_prompt(&self.directory, request.district_id);
        let chat_request =
            self.build_remote_request(system_prompt, &request.history, &request.message);

        match client.complete(chat_request).await {
            Ok(response) => Ok(self.remote_response(&request, response)),
            Err(error) => {
                let reason = FallbackReason::from_remote_error(&error);
                let status = error.status();
                tracing::warn!(
                    district_id = request.district_id,
                    model = self.config.model.as_str(),
                    status,
                    fallback_reason = reason.as_str(),
                    error = %error,
                    "remote chat completion failed; answering locally"
                );
                Ok(self.fallback_response(&request, reason, status))
            }
        }
    }

    fn build_remote_request(
        &self,
        system_prompt: String,
        history: &[ConversationTurn],
        message: &str,
    ) -> ChatRequest {
        let skip = history.len().saturating_sub(self.config.history_limit);
        let mut messages = Vec::with_capacity(history.len() - skip + 2);
        messages.push(Message::system(system_prompt));
        messages.extend(history[skip..].iter().map(ConversationTurn::to_message));
        messages.push(Message::user(message));

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
        }
    }

    fn remote_response(&self, request: &GatewayRequest, response: ChatResponse) -> GatewayResponse {
        tracing::debug!(
            district_id = request.district_id,
            model = self.config.model.as_str(),
            total_tokens = response.usage.total_tokens,
            "remote chat completion succeeded"
        );
        GatewayResponse {
            message: response.message.content,
            citations: build_citations(request.district_id),
            source: ResponseSource::Remote,
            model: self.config.model.clone(),
            usage: Some(response.usage),
            fallback_reason: None,
            remote_status: None,
        }
    }

    fn fallback_response(
        &self,
        request: &GatewayRequest,
        reason: FallbackReason,
        remote_status: Option<u16>,
    ) -> GatewayResponse {
        GatewayResponse {
            message: local_fallback(&self.directory, &request.message, request.district_id),
            citations: Vec::new(),
            source: ResponseSource::LocalFallback,
            model: FALLBACK_MODEL_ID.to_string(),
            usage: None,
            fallback_reason: Some(reason),
            remote_status,
        }
    }
}
