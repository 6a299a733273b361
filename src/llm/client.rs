use super::{GeminiClient, OpenAiClient, types::*};
use crate::{
    Result,
    config::{LlmConfig, LlmProvider},
};
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}

/// Builds the client for the configured provider.
pub fn create_client(config: &LlmConfig) -> Result<Box<dyn LlmClient>> {
    let client: Box<dyn LlmClient> = match config.provider {
        LlmProvider::Gemini => Box::new(GeminiClient::new(config)),
        LlmProvider::Openai => Box::new(OpenAiClient::new(config)),
    };
    Ok(client)
}
