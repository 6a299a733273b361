use crate::config::GenerationConfig;

/// A single-turn generation call: one user text plus the fixed model settings.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    /// `None` when the provider answered without any text.
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl GenerationResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            finish_reason: Some("STOP".to_string()),
            usage: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
