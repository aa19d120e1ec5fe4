//! Parsing of raw model output into recipe records.
//!
//! The model is asked for bare JSON but frequently wraps it in a markdown
//! fence anyway, so extraction tries an ordered list of strategies:
//! tagged fence, then generic fence, then the raw text as-is. A malformed
//! JSON envelope fails the whole batch; a single malformed recipe inside
//! a well-formed envelope is dropped and the rest are kept.

use serde_json::Value;

use crate::error::ParseError;
use crate::types::Recipe;

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Extract the JSON candidate from possibly-fenced raw text.
///
/// Takes the substring between the end of the first fence marker and the
/// last closing fence. If no fence is present, or the closing fence does
/// not lie beyond the opening marker, the whole trimmed text is the
/// candidate (and will fail JSON decoding on garbage input).
fn extract_json_candidate(raw_text: &str) -> &str {
    let trimmed = raw_text.trim();

    for marker in [TAGGED_FENCE, FENCE] {
        if let Some(start) = trimmed.find(marker) {
            let body_start = start + marker.len();
            if let Some(end) = trimmed.rfind(FENCE) {
                if end > body_start {
                    return trimmed[body_start..end].trim();
                }
            }
            break;
        }
    }

    trimmed
}

/// Parse raw model output into a list of recipes.
///
/// Fails with [`ParseError::MalformedJson`] when no JSON document can be
/// recovered at all. Individual recipe candidates that are missing
/// required fields or have wrong types are skipped with a warning; the
/// returned list may be empty.
pub fn parse_recipes(raw_text: &str) -> Result<Vec<Recipe>, ParseError> {
    let candidate = extract_json_candidate(raw_text);

    let data: Value = serde_json::from_str(candidate).map_err(|e| {
        tracing::debug!(error = %e, "AI response was not valid JSON");
        ParseError::MalformedJson(e.to_string())
    })?;

    let candidates = match data.get("recipes") {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };

    let mut recipes = Vec::with_capacity(candidates.len());
    for (index, value) in candidates.into_iter().enumerate() {
        match serde_json::from_value::<Recipe>(value) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping invalid recipe candidate");
            }
        }
    }

    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NutritionInfo;
    use serde_json::json;

    fn valid_recipe_json(name: &str) -> Value {
        json!({
            "name": name,
            "ingredients": ["pasta", "garlic"],
            "instructions": ["Boil pasta", "Add garlic"],
            "cookingTime": "15 minutes",
            "difficulty": "Easy",
            "nutrition": {
                "calories": 400,
                "protein": "12g",
                "carbs": "65g"
            }
        })
    }

    #[test]
    fn test_parse_bare_json_round_trip() {
        let raw = json!({
            "recipes": [valid_recipe_json("First"), valid_recipe_json("Second")]
        })
        .to_string();

        let recipes = parse_recipes(&raw).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "First");
        assert_eq!(recipes[1].name, "Second");
        assert_eq!(
            recipes[0].nutrition,
            NutritionInfo {
                calories: 400,
                protein: "12g".to_string(),
                carbs: "65g".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_tagged_fence() {
        let raw = "```json\n{\"recipes\":[]}\n```";
        let recipes = parse_recipes(raw).unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_parse_generic_fence() {
        let body = json!({ "recipes": [valid_recipe_json("Fenced")] }).to_string();
        let raw = format!("```\n{}\n```", body);
        let recipes = parse_recipes(&raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Fenced");
    }

    #[test]
    fn test_parse_fence_with_surrounding_prose() {
        let body = json!({ "recipes": [valid_recipe_json("Wrapped")] }).to_string();
        let raw = format!("Here are your recipes:\n```json\n{}\n```\nEnjoy!", body);
        let recipes = parse_recipes(&raw).unwrap();
        assert_eq!(recipes.len(), 1);
    }

    #[test]
    fn test_parse_skips_invalid_candidate() {
        let mut broken = valid_recipe_json("Broken");
        broken.as_object_mut().unwrap().remove("instructions");

        let raw = json!({ "recipes": [valid_recipe_json("Good"), broken] }).to_string();
        let recipes = parse_recipes(&raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Good");
    }

    #[test]
    fn test_parse_skips_wrongly_typed_candidate() {
        let mut wrong = valid_recipe_json("Wrong");
        wrong["instructions"] = json!("just one big string");

        let raw = json!({ "recipes": [wrong, valid_recipe_json("Good")] }).to_string();
        let recipes = parse_recipes(&raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Good");
    }

    #[test]
    fn test_parse_not_json_is_fatal() {
        let result = parse_recipes("not json at all");
        assert!(matches!(result, Err(ParseError::MalformedJson(_))));
    }

    #[test]
    fn test_parse_missing_recipes_key_yields_empty() {
        let recipes = parse_recipes("{\"something_else\": 1}").unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_parse_non_array_recipes_yields_empty() {
        let recipes = parse_recipes("{\"recipes\": \"oops\"}").unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_parse_unclosed_fence_is_fatal() {
        // Opening fence with no closing fence: falls back to the raw
        // text, which is not valid JSON.
        let result = parse_recipes("```json\n{\"recipes\":[]}");
        assert!(matches!(result, Err(ParseError::MalformedJson(_))));
    }
}
