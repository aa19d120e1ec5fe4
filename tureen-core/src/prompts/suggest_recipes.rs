//! Recipe suggestion prompt with a fixed JSON output schema.

/// Render the recipe suggestion prompt for the given ingredients.
///
/// The prompt pins the model to a fixed JSON schema and forbids prose
/// outside the JSON; the parser still tolerates fenced output since
/// models do not always comply.
pub fn render_suggest_recipes_prompt(ingredients: &[String]) -> String {
    let ingredients_list = ingredients.join(", ");

    format!(
        r#"Generate 2-3 creative recipe suggestions using these ingredients: {ingredients_list}

Requirements:
- Each recipe must use the provided ingredients as primary components
- Include estimated cooking time and difficulty level
- Provide realistic nutritional information (calories, protein, carbs)
- Format response as valid JSON only
- Be creative but practical with cooking instructions

Response format (return ONLY valid JSON):
{{
  "recipes": [
    {{
      "name": "Recipe Name",
      "ingredients": ["ingredient1", "ingredient2", "additional_ingredients_needed"],
      "instructions": ["step1", "step2", "step3"],
      "cookingTime": "X minutes",
      "difficulty": "Easy/Medium/Hard",
      "nutrition": {{
        "calories": X,
        "protein": "Xg",
        "carbs": "Xg"
      }}
    }}
  ]
}}

Important: Return ONLY the JSON response, no additional text or explanations."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_suggest_recipes_prompt(&[
            "chicken".to_string(),
            "rice".to_string(),
            "soy sauce".to_string(),
        ]);

        assert!(prompt.contains("chicken, rice, soy sauce"));
        assert!(prompt.contains("2-3 creative recipe suggestions"));
        assert!(prompt.contains("\"recipes\""));
        assert!(prompt.contains("cookingTime"));
        assert!(prompt.contains("ONLY the JSON response"));
    }
}
