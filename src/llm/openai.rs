use super::{LlmClient, types::*};
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// Client for OpenAI-compatible chat completion endpoints.
///
/// Top-k has no counterpart in the chat completions API and is not sent.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.clone());
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

pub(crate) fn build_messages(request: &GenerationRequest) -> Result<Vec<ChatCompletionRequestMessage>> {
    let mut messages = Vec::with_capacity(2);

    if let Some(ref instruction) = request.system_instruction {
        let msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(ChatCompletionRequestSystemMessageContent::Text(
                instruction.clone(),
            ))
            .build()
            .map_err(|e| Error::llm(format!("Failed to build system message: {}", e)))?;
        messages.push(msg.into());
    }

    let msg = ChatCompletionRequestUserMessageArgs::default()
        .content(ChatCompletionRequestUserMessageContent::Text(
            request.prompt.clone(),
        ))
        .build()
        .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?;
    messages.push(msg.into());

    Ok(messages)
}

pub(crate) fn build_request(request: &GenerationRequest) -> Result<CreateChatCompletionRequest> {
    let openai_request = CreateChatCompletionRequestArgs::default()
        .model(&request.model)
        .messages(build_messages(request)?)
        .temperature(request.generation.temperature)
        .top_p(request.generation.top_p)
        .max_tokens(request.generation.max_output_tokens)
        .build()?;

    Ok(openai_request)
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        debug!("Creating chat completion with model {}", request.model);

        let openai_request = build_request(&request)?;
        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choice = response.choices.into_iter().next();
        let finish_reason = choice
            .as_ref()
            .and_then(|c| c.finish_reason.as_ref())
            .map(|fr| format!("{fr:?}"));
        let text = choice
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty());

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(GenerationResponse {
            text,
            finish_reason,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use pretty_assertions::assert_eq;

    fn create_test_request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-flash-latest".to_string(),
            system_instruction: Some("Be brief".to_string()),
            prompt: "What is Rust?".to_string(),
            generation: GenerationConfig::default(),
        }
    }

    #[test]
    fn test_messages_start_with_system_instruction() {
        let messages = build_messages(&create_test_request()).unwrap();

        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(messages[1], ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_messages_without_system_instruction() {
        let mut request = create_test_request();
        request.system_instruction = None;

        let messages = build_messages(&request).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(matches!(messages[0], ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_request_carries_sampling_settings() {
        let request = build_request(&create_test_request()).unwrap();

        assert_eq!(request.model, "gemini-flash-latest");
        assert_eq!(request.temperature, Some(0.9));
        assert_eq!(request.top_p, Some(1.0));
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let config = LlmConfig {
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            api_key: "test-api-key".to_string(),
            ..LlmConfig::default()
        };

        let _client = OpenAiClient::new(&config);
    }
}
