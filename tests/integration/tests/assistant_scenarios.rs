use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use civic_ai::{ChatRequest, ChatResponse, ChatUsage, CivicAiError, LlmClient, Message, MessageRole};
use civic_assistant::{
    AssistantConfig, AssistantError, CivicAssistant, ConversationTurn, FallbackReason,
    GatewayRequest, ResponseSource,
};
use civic_directory::WardDirectory;
use tokio::sync::Mutex as AsyncMutex;

struct ScriptedClient {
    responses: AsyncMutex<VecDeque<Result<ChatResponse, CivicAiError>>>,
    requests: AsyncMutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<ChatResponse, CivicAiError>>) -> Self {
        Self {
            responses: AsyncMutex::new(VecDeque::from(responses)),
            requests: AsyncMutex::new(Vec::new()),
        }
    }

    async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, CivicAiError> {
        self.requests.lock().await.push(request);
        let mut responses = self.responses.lock().await;
        responses.pop_front().unwrap_or_else(|| {
            Err(CivicAiError::InvalidResponse(
                "scripted response queue exhausted".into(),
            ))
        })
    }
}

fn completion(text: &str) -> Result<ChatResponse, CivicAiError> {
    Ok(ChatResponse {
        message: Message::assistant_text(text),
        finish_reason: Some("stop".to_string()),
        usage: ChatUsage {
            input_tokens: 100,
            output_tokens: 20,
            total_tokens: 120,
        },
    })
}

fn server_error(status: u16) -> Result<ChatResponse, CivicAiError> {
    Err(CivicAiError::HttpStatus {
        status,
        body: "upstream failure".to_string(),
    })
}

fn directory() -> Arc<WardDirectory> {
    Arc::new(WardDirectory::embedded().expect("embedded ward data"))
}

fn scripted_assistant(
    responses: Vec<Result<ChatResponse, CivicAiError>>,
) -> (CivicAssistant, Arc<ScriptedClient>) {
    let client = Arc::new(ScriptedClient::new(responses));
    let assistant = CivicAssistant::new(
        directory(),
        Some(Arc::clone(&client) as Arc<dyn LlmClient>),
        AssistantConfig::default(),
    );
    (assistant, client)
}

#[tokio::test]
async fn integration_ward_48_representative_question_without_credential() {
    let assistant = CivicAssistant::new(directory(), None, AssistantConfig::default());
    let response = assistant
        .handle(GatewayRequest::new("Who is my representative?").with_district(48))
        .await
        .expect("fallback answers");

    let record = assistant.directory().by_id(48).expect("ward 48");
    assert!(response.message.contains(&record.representative_name));
    assert!(response.message.contains(&record.office_phone));
    assert!(response.citations.is_empty());
    assert_eq!(response.source, ResponseSource::LocalFallback);
}

#[tokio::test]
async fn integration_election_pointer_in_both_modes() {
    let request = GatewayRequest::new("When is the next election?");

    let offline = CivicAssistant::new(directory(), None, AssistantConfig::default());
    let response = offline
        .handle(request.clone())
        .await
        .expect("fallback answers");
    assert!(response
        .message
        .contains("chicagoelections.gov/your-voter-information"));

    let (forced, client) = scripted_assistant(vec![server_error(502)]);
    let response = forced.handle(request).await.expect("fallback answers");
    assert_eq!(client.request_count().await, 1);
    assert_eq!(response.fallback_reason, Some(FallbackReason::RemoteStatus));
    assert!(response
        .message
        .contains("chicagoelections.gov/your-voter-information"));
}

#[tokio::test]
async fn integration_remote_500_degrades_to_template_answer() {
    let (assistant, client) = scripted_assistant(vec![server_error(500)]);
    let response = assistant
        .handle(GatewayRequest::new("What neighborhoods are here?").with_district(1))
        .await
        .expect("fallback answers");

    assert_eq!(client.request_count().await, 1);
    assert_eq!(response.source, ResponseSource::LocalFallback);
    assert!(response.citations.is_empty());
    assert!(!response.message.is_empty());
    assert!(response.message.contains("Logan Square"));
}

#[tokio::test]
async fn integration_remote_200_is_returned_verbatim() {
    let text = "Ward 2 is represented by **Brian Hopkins**.\n\n- Phone: (312) 744-6836";
    let (assistant, _client) = scripted_assistant(vec![completion(text)]);
    let response = assistant
        .handle(GatewayRequest::new("Who represents ward 2?").with_district(2))
        .await
        .expect("remote answers");

    assert_eq!(response.source, ResponseSource::Remote);
    assert_eq!(response.message, text);
    assert!(!response.citations.is_empty());
    assert_eq!(response.citations[0].title, "Chicago Data Portal");
}

#[tokio::test]
async fn integration_caller_supplied_history_drives_multi_turn_conversation() {
    let (assistant, client) = scripted_assistant(vec![
        completion("Ward 48 is Leni Manaa-Hoppenworth."),
        completion("You can call (773) 784-5277."),
    ]);

    let first = assistant
        .handle(GatewayRequest::new("Who represents me?").with_district(48))
        .await
        .expect("first turn");
    let history = vec![
        ConversationTurn::user("Who represents me?"),
        ConversationTurn::assistant(first.message.clone()),
    ];
    let second = assistant
        .handle(
            GatewayRequest::new("How do I call them?")
                .with_district(48)
                .with_history(history),
        )
        .await
        .expect("second turn");
    assert_eq!(second.message, "You can call (773) 784-5277.");

    let requests = client.requests.lock().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].messages.len(), 2);
    let roles: Vec<MessageRole> = requests[1]
        .messages
        .iter()
        .map(|message| message.role)
        .collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::System,
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::User
        ]
    );
}

#[tokio::test]
async fn integration_concurrent_requests_are_independent() {
    let assistant = CivicAssistant::new(directory(), None, AssistantConfig::default());
    let mut handles = Vec::new();
    for ward in 1..=50_i64 {
        let assistant = assistant.clone();
        handles.push(tokio::spawn(async move {
            let response = assistant
                .handle(GatewayRequest::new("who is the alderperson?").with_district(ward))
                .await
                .expect("fallback answers");
            (ward, response)
        }));
    }

    for handle in handles {
        let (ward, response) = handle.await.expect("task completes");
        assert!(
            response
                .message
                .starts_with(&format!("Ward {ward} is represented by")),
            "ward {ward}"
        );
    }
}

#[tokio::test]
async fn integration_blank_message_never_reaches_remote() {
    let (assistant, client) = scripted_assistant(vec![completion("unused")]);
    let result = assistant.handle(GatewayRequest::new(" \t ")).await;
    assert_eq!(result, Err(AssistantError::EmptyMessage));
    assert_eq!(client.request_count().await, 0);
}
