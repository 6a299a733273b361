use async_trait::async_trait;
use gemini_chat::{
    Error, Result,
    llm::{GenerationRequest, GenerationResponse, LlmClient},
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock LLM client that replays queued outcomes and records every request
#[derive(Clone)]
pub struct MockLlmClient {
    pub outcomes: Arc<Mutex<VecDeque<Result<GenerationResponse>>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text(self, text: &str) -> Self {
        self.push(Ok(GenerationResponse::from_text(text)));
        self
    }

    pub fn with_empty_response(self) -> Self {
        self.push(Ok(GenerationResponse::empty()));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, outcome: Result<GenerationResponse>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.requests.lock().unwrap().push(request);

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::llm("No more mock responses available")))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
