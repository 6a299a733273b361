use serde::{Deserialize, Serialize};

pub const NO_MESSAGE_ERROR: &str = "No message provided";
pub const EMPTY_RESPONSE_ERROR: &str = "Model returned an empty response";
pub const UPSTREAM_FAILURE_ERROR: &str = "Failed to get response from AI";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
