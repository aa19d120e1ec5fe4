//! Fake LLM provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests (and keyless local runs) to work without network access
//! or API costs.

use super::{LlmError, LlmProvider};
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider with standard responses for recipe generation.
    ///
    /// The recipe response is wrapped in a markdown fence on purpose, so
    /// the fenced-JSON extraction path gets exercised outside of tests too.
    pub fn with_recipe_responses() -> Self {
        let mut provider = Self::new();

        // Recipe generation response
        provider.add_response(
            "recipe suggestions",
            r#"```json
{
  "recipes": [
    {
      "name": "Pantry Fried Rice",
      "ingredients": ["rice", "egg", "soy sauce", "scallions"],
      "instructions": [
        "Cook the rice and let it cool",
        "Scramble the egg in a hot pan",
        "Add rice and soy sauce, fry until golden",
        "Top with sliced scallions"
      ],
      "cookingTime": "20 minutes",
      "difficulty": "Easy",
      "nutrition": {
        "calories": 420,
        "protein": "14g",
        "carbs": "62g"
      }
    },
    {
      "name": "Simple Omelette",
      "ingredients": ["egg", "butter", "salt"],
      "instructions": [
        "Whisk the eggs with a pinch of salt",
        "Melt butter in a nonstick pan",
        "Pour in eggs and fold once set"
      ],
      "cookingTime": "10 minutes",
      "difficulty": "Easy",
      "nutrition": {
        "calories": 250,
        "protein": "16g",
        "carbs": "2g"
      }
    }
  ]
}
```"#,
        );

        // Health check probe response
        provider.add_response("hello", "Hello");

        provider
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
