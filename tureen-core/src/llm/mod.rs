//! LLM provider abstraction for recipe generation.
//!
//! This module provides a trait-based abstraction over generative text
//! providers (Gemini, plus a fake for testing) so the rest of the crate
//! only ever sees "prompt in, text out".

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. A provider makes
/// a single attempt per call: no retry, no timeout enforcement. Transport
/// and provider failures surface as [`LlmError`] for the caller to handle.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the model and get its raw text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-pro").
    fn model_name(&self) -> &str;
}

/// Registry of available providers.
///
/// Use environment variables to configure:
/// - TUREEN_AI_PROVIDER: "gemini" | "fake" (default "fake")
/// - TUREEN_AI_MODEL: Model name (provider-specific)
/// - GEMINI_API_KEY: API key for Gemini
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("TUREEN_AI_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_recipe_responses())),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let model = std::env::var("TUREEN_AI_MODEL")
                .unwrap_or_else(|_| gemini::DEFAULT_MODEL.to_string());
            Ok(Box::new(GeminiProvider::new(api_key, model)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
