//! Round-trip and aggregate tests for the interaction log.

use std::fs;

use tureen_core::storage::InteractionLog;
use tureen_core::types::{NutritionInfo, Recipe};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_recipe(name: &str) -> Recipe {
    Recipe {
        name: name.to_string(),
        ingredients: strings(&["pasta", "garlic"]),
        instructions: strings(&["Boil pasta", "Add garlic"]),
        cooking_time: "15 minutes".to_string(),
        difficulty: "Easy".to_string(),
        nutrition: NutritionInfo {
            calories: 400,
            protein: "12g".to_string(),
            carbs: "65g".to_string(),
        },
    }
}

#[test]
fn test_append_then_get_by_id_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    let ingredients = strings(&["pasta", "garlic"]);
    let recipes = vec![sample_recipe("Garlic Pasta"), sample_recipe("Aglio e Olio")];

    let id = log
        .append(&ingredients, Some("{\"recipes\": [...]}"), &recipes, true, None)
        .unwrap();

    let record = log.get_by_id(&id).unwrap().expect("record should exist");
    assert_eq!(record.interaction_id, id);
    assert_eq!(record.user_input.ingredients, ingredients);
    assert_eq!(record.user_input.ingredient_count, 2);
    assert_eq!(record.parsed_output.recipe_count, 2);
    assert_eq!(record.parsed_output.recipes[0].name, "Garlic Pasta");
    assert!(record.parsed_output.success);
    assert_eq!(record.metadata.processing_status, "success");
    assert!(record.metadata.error_message.is_none());
    assert_eq!(record.llm_interaction.response_type, "str");
}

#[test]
fn test_failed_attempt_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    let id = log
        .append(
            &strings(&["rice"]),
            None,
            &[],
            false,
            Some("Failed to generate recipes: boom"),
        )
        .unwrap();

    let record = log.get_by_id(&id).unwrap().unwrap();
    assert!(!record.parsed_output.success);
    assert_eq!(record.metadata.processing_status, "failed");
    assert_eq!(
        record.metadata.error_message.as_deref(),
        Some("Failed to generate recipes: boom")
    );
    assert!(record.llm_interaction.raw_response.is_none());
    assert_eq!(record.llm_interaction.response_length, 0);
}

#[test]
fn test_get_by_id_unknown_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    assert!(log.get_by_id("recipe_interaction_19700101_000000").unwrap().is_none());
}

#[test]
fn test_missing_file_reads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let log = InteractionLog::new(&path).unwrap();

    fs::remove_file(&path).unwrap();

    assert!(log.get_all().unwrap().is_empty());
    assert_eq!(log.stats().unwrap().total_interactions, 0);
}

#[test]
fn test_get_recent_returns_tail_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    for i in 0..5 {
        log.append(&strings(&[&format!("ingredient-{}", i)]), None, &[], false, Some("x"))
            .unwrap();
    }

    let recent = log.get_recent(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].user_input.ingredients, strings(&["ingredient-3"]));
    assert_eq!(recent[1].user_input.ingredients, strings(&["ingredient-4"]));
}

#[test]
fn test_get_recent_with_large_limit_returns_all() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    log.append(&strings(&["egg"]), None, &[], false, Some("x")).unwrap();

    assert_eq!(log.get_recent(10).unwrap().len(), 1);
}

#[test]
fn test_stats_empty_store_has_no_division_by_zero() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    let stats = log.stats().unwrap();
    assert_eq!(stats.total_interactions, 0);
    assert_eq!(stats.success_rate, 0.0);
    assert_eq!(stats.average_recipes_per_interaction, 0.0);
}

#[test]
fn test_stats_aggregates() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    let two = vec![sample_recipe("A"), sample_recipe("B")];
    let one = vec![sample_recipe("C")];

    log.append(&strings(&["rice"]), Some("raw"), &two, true, None).unwrap();
    log.append(&strings(&["egg"]), Some("raw"), &one, true, None).unwrap();
    log.append(&strings(&["milk"]), None, &[], false, Some("boom")).unwrap();

    let stats = log.stats().unwrap();
    assert_eq!(stats.total_interactions, 3);
    assert_eq!(stats.successful_interactions, 2);
    assert_eq!(stats.failed_interactions, 1);
    assert!((stats.success_rate - 66.666).abs() < 0.01);
    assert_eq!(stats.total_recipes_generated, 3);
    // Averaged over successful interactions only.
    assert!((stats.average_recipes_per_interaction - 1.5).abs() < f64::EPSILON);
    assert!(stats.file_size_bytes > 0);
}

#[test]
fn test_export_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::new(dir.path().join("store.json")).unwrap();

    log.append(&strings(&["rice"]), Some("raw"), &[sample_recipe("A")], true, None)
        .unwrap();

    let export_path = dir.path().join("export.json");
    let written = log.export(Some(export_path.to_str().unwrap())).unwrap();
    assert_eq!(written, export_path.to_str().unwrap());

    let content = fs::read_to_string(&export_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["export_info"]["total_interactions"], 1);
    assert_eq!(value["interactions"].as_array().unwrap().len(), 1);
    assert!(value["export_info"]["timestamp"].is_string());
}

#[test]
fn test_append_propagates_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let log = InteractionLog::new(&path).unwrap();

    // Replace the store file with a directory so the rewrite fails.
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let result = log.append(&strings(&["rice"]), None, &[], false, Some("x"));
    assert!(result.is_err());
}

#[test]
fn test_records_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let id = {
        let log = InteractionLog::new(&path).unwrap();
        log.append(&strings(&["rice"]), Some("raw"), &[sample_recipe("A")], true, None)
            .unwrap()
    };

    let reopened = InteractionLog::new(&path).unwrap();
    let record = reopened.get_by_id(&id).unwrap().unwrap();
    assert_eq!(record.user_input.ingredients, strings(&["rice"]));
}
