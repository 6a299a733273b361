use super::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use gemini_chat::{
    assistant::Assistant,
    config::{Config, LlmConfig},
    llm::LlmClient,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.llm.api_key = "test-api-key".to_string();
    config
}

pub fn create_test_llm_config() -> LlmConfig {
    create_test_config().llm
}

/// Build the full router around an arbitrary client
pub fn create_app_with_client(client: Box<dyn LlmClient>) -> Router {
    let assistant = Assistant::with_client(create_test_llm_config(), client);
    server::router(AppState {
        assistant: Arc::new(assistant),
    })
}

/// Build the full router around a mock client
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    create_app_with_client(Box::new(mock.clone()))
}

pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 8080
  logs:
    level: "debug"

llm:
  provider: "gemini"
  model: "gemini-1.5-flash"
  system_instruction: "You are terse."
  generation:
    temperature: 0.5
    top_p: 0.95
    top_k: 40
    max_output_tokens: 512
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

llm:
  provider: "unknown"
"#;
