use std::env;

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (required)
/// - OPENAI_MODEL: Chat model used for recipe synthesis (default: "gpt-4o-mini")
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let api_key =
            env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY environment variable must be set");
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Self { api_key, model }
    }
}
