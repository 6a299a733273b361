use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// True when the failure happened while talking to the model provider.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Llm(_) | Self::Network(_) | Self::OpenAi(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_message() {
        assert_eq!(
            Error::EmptyResponse.to_string(),
            "Model returned an empty response"
        );
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(s) if s == "x"));
        assert!(matches!(Error::llm("boom"), Error::Llm(s) if s == "boom"));
        assert!(matches!(Error::invalid_input("y"), Error::InvalidInput(_)));
    }

    #[test]
    fn test_is_upstream() {
        assert!(Error::llm("quota exceeded").is_upstream());
        assert!(!Error::EmptyResponse.is_upstream());
        assert!(!Error::config("bad").is_upstream());
    }
}
