use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{GenerationRequest, LlmClient, create_client},
};
use tracing::{debug, error, info, warn};

/// Single-turn chat adapter: one user message in, one model reply out.
///
/// Holds the model settings fixed at startup; nothing changes between requests.
pub struct Assistant {
    llm_client: Box<dyn LlmClient>,
    config: LlmConfig,
}

impl Assistant {
    pub fn new(config: LlmConfig) -> Result<Self> {
        info!(
            "Initializing assistant with provider {:?} and model {}",
            config.provider, config.model
        );

        let llm_client = create_client(&config)?;
        Ok(Self::with_client(config, llm_client))
    }

    pub fn with_client(config: LlmConfig, llm_client: Box<dyn LlmClient>) -> Self {
        Self { llm_client, config }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn build_request(&self, message: &str) -> GenerationRequest {
        let instruction = self.config.system_instruction.trim();

        GenerationRequest {
            model: self.config.model.clone(),
            system_instruction: (!instruction.is_empty()).then(|| instruction.to_string()),
            prompt: message.to_string(),
            generation: self.config.generation.clone(),
        }
    }

    /// Sends `message` upstream and returns the generated text untouched.
    pub async fn reply(&self, message: &str) -> Result<String> {
        if message.is_empty() {
            return Err(Error::invalid_input("message is empty"));
        }

        let request = self.build_request(message);

        match self.llm_client.generate(request).await {
            Ok(response) => {
                if let Some(usage) = &response.usage {
                    debug!(
                        "Token usage: prompt={}, completion={}, total={}",
                        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                    );
                }

                match response.text {
                    Some(text) if !text.is_empty() => Ok(text),
                    _ => {
                        warn!(
                            "Model returned no text (finish reason: {})",
                            response.finish_reason.as_deref().unwrap_or("unknown")
                        );
                        Err(Error::EmptyResponse)
                    }
                }
            }
            Err(e) => {
                if e.is_upstream() {
                    error!("Error calling {:?} API: {}", self.config.provider, e);
                } else {
                    error!("Failed to generate response: {}", e);
                }
                Err(e)
            }
        }
    }
}
