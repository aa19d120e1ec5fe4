pub mod error;
pub mod generate;
pub mod ingredients;
pub mod llm;
pub mod parse;
pub mod prompts;
pub mod storage;
pub mod types;

pub use error::{ParseError, StorageError};
pub use generate::{generate_recipes, GenerationOutcome};
pub use ingredients::{normalize, validate, ValidationError, MAX_INGREDIENT_LEN};
pub use llm::{create_provider_from_env, FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use parse::parse_recipes;
pub use storage::{InteractionLog, InteractionRecord, LogStats};
pub use types::{NutritionInfo, Recipe, RecipeResult};
