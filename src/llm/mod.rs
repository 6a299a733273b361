mod client;
mod gemini;
mod openai;
mod types;

pub use client::*;
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use types::*;
