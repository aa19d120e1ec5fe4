//! Prompt templates sent to the LLM provider.

pub mod suggest_recipes;

pub use suggest_recipes::render_suggest_recipes_prompt;
