//! Durable interaction log.
//!
//! Every generation attempt (inputs, raw model output, parsed recipes,
//! outcome) is appended to a single JSON document on disk, which also
//! backs point, range, and aggregate read queries.
//!
//! The store is read wholesale and rewritten wholesale on every append.
//! A process-local mutex serializes writers within this process; there is
//! no cross-process locking, so two processes appending concurrently can
//! lose a record (last-writer-wins on the whole file). Single-process
//! deployment is an assumption of this design.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use utoipa::ToSchema;

use crate::error::StorageError;
use crate::types::Recipe;

/// The user-supplied side of an interaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInput {
    pub ingredients: Vec<String>,
    pub ingredient_count: usize,
}

/// The raw model exchange of an interaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LlmInteraction {
    pub raw_response: Option<String>,
    pub response_length: usize,
    pub response_type: String,
}

/// The parsed outcome of an interaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParsedOutput {
    pub recipes: Vec<Recipe>,
    pub recipe_count: usize,
    pub success: bool,
}

/// Processing metadata of an interaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InteractionMetadata {
    pub error_message: Option<String>,
    /// "success" or "failed".
    pub processing_status: String,
}

/// One logged generation attempt. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InteractionRecord {
    pub interaction_id: String,
    /// ISO-8601 timestamp of the append.
    pub timestamp: String,
    pub user_input: UserInput,
    pub llm_interaction: LlmInteraction,
    pub parsed_output: ParsedOutput,
    pub metadata: InteractionMetadata,
}

/// Aggregate statistics over the store.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogStats {
    pub total_interactions: usize,
    pub successful_interactions: usize,
    pub failed_interactions: usize,
    /// Percentage of successful interactions; 0 when the store is empty.
    pub success_rate: f64,
    pub total_recipes_generated: usize,
    /// Average recipes per *successful* interaction, not per interaction
    /// overall; 0 when there are no successful interactions. This keeps
    /// the historical definition even though it undercounts relative to
    /// the total.
    pub average_recipes_per_interaction: f64,
    pub storage_file: String,
    pub file_size_bytes: u64,
}

/// On-disk document layout: a single top-level `interactions` array.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    interactions: Vec<InteractionRecord>,
}

#[derive(Debug, Serialize)]
struct ExportInfo {
    timestamp: String,
    total_interactions: usize,
    exported_by: &'static str,
}

#[derive(Debug, Serialize)]
struct ExportDocument {
    export_info: ExportInfo,
    interactions: Vec<InteractionRecord>,
}

/// Append-only interaction log backed by a JSON file.
#[derive(Debug)]
pub struct InteractionLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl InteractionLog {
    /// Open the log at the given path, creating an empty store file if
    /// none exists yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let log = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if !log.path.exists() {
            log.write_document(&StoreDocument::default())?;
        }

        Ok(log)
    }

    /// Path of the backing store file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Append one generation attempt and return its interaction id.
    ///
    /// A write failure propagates: silently losing a log entry would hide
    /// data loss from the caller.
    pub fn append(
        &self,
        ingredients: &[String],
        raw_response: Option<&str>,
        parsed_recipes: &[Recipe],
        success: bool,
        error_message: Option<&str>,
    ) -> Result<String, StorageError> {
        let now = Utc::now();
        let interaction_id = format!("recipe_interaction_{}", now.format("%Y%m%d_%H%M%S"));

        let record = InteractionRecord {
            interaction_id: interaction_id.clone(),
            timestamp: now.to_rfc3339(),
            user_input: UserInput {
                ingredients: ingredients.to_vec(),
                ingredient_count: ingredients.len(),
            },
            llm_interaction: LlmInteraction {
                raw_response: raw_response.map(|r| r.to_string()),
                response_length: raw_response.map(|r| r.chars().count()).unwrap_or(0),
                response_type: raw_response.map_or("none", |_| "str").to_string(),
            },
            parsed_output: ParsedOutput {
                recipes: parsed_recipes.to_vec(),
                recipe_count: parsed_recipes.len(),
                success,
            },
            metadata: InteractionMetadata {
                error_message: error_message.map(|m| m.to_string()),
                processing_status: if success { "success" } else { "failed" }.to_string(),
            },
        };

        // Hold the lock across the whole read-modify-write cycle.
        let _guard = self.write_lock.lock().unwrap();

        let mut document = self.read_document()?;
        document.interactions.push(record);
        self.write_document(&document)?;

        tracing::debug!(interaction_id = %interaction_id, "Interaction stored");
        Ok(interaction_id)
    }

    /// All stored interactions, oldest first. A missing store file reads
    /// as an empty store.
    pub fn get_all(&self) -> Result<Vec<InteractionRecord>, StorageError> {
        Ok(self.read_document()?.interactions)
    }

    /// Look up a single interaction by id.
    pub fn get_by_id(&self, interaction_id: &str) -> Result<Option<InteractionRecord>, StorageError> {
        let interactions = self.get_all()?;
        Ok(interactions
            .into_iter()
            .find(|record| record.interaction_id == interaction_id))
    }

    /// The last `limit` interactions in store order (most recent last).
    pub fn get_recent(&self, limit: usize) -> Result<Vec<InteractionRecord>, StorageError> {
        let interactions = self.get_all()?;
        let skip = interactions.len().saturating_sub(limit);
        Ok(interactions.into_iter().skip(skip).collect())
    }

    /// Aggregate statistics over the whole store.
    pub fn stats(&self) -> Result<LogStats, StorageError> {
        let interactions = self.get_all()?;

        let total_interactions = interactions.len();
        let successful_interactions = interactions
            .iter()
            .filter(|record| record.parsed_output.success)
            .count();
        let failed_interactions = total_interactions - successful_interactions;
        let total_recipes_generated: usize = interactions
            .iter()
            .map(|record| record.parsed_output.recipe_count)
            .sum();

        let success_rate = if total_interactions > 0 {
            (successful_interactions as f64 / total_interactions as f64) * 100.0
        } else {
            0.0
        };
        let average_recipes_per_interaction = if successful_interactions > 0 {
            total_recipes_generated as f64 / successful_interactions as f64
        } else {
            0.0
        };

        let file_size_bytes = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);

        Ok(LogStats {
            total_interactions,
            successful_interactions,
            failed_interactions,
            success_rate,
            total_recipes_generated,
            average_recipes_per_interaction,
            storage_file: self.path.display().to_string(),
            file_size_bytes,
        })
    }

    /// Export a snapshot of the store and return the filename written.
    ///
    /// Defaults to a timestamped filename next to the working directory
    /// when none is given.
    pub fn export(&self, filename: Option<&str>) -> Result<String, StorageError> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => format!("recipe_export_{}.json", Utc::now().format("%Y%m%d_%H%M%S")),
        };

        let interactions = self.get_all()?;

        let document = ExportDocument {
            export_info: ExportInfo {
                timestamp: Utc::now().to_rfc3339(),
                total_interactions: interactions.len(),
                exported_by: "tureen",
            },
            interactions,
        };

        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&filename, json)?;

        tracing::info!(filename = %filename, "Exported interaction log");
        Ok(filename)
    }

    fn read_document(&self) -> Result<StoreDocument, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreDocument::default()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    fn write_document(&self, document: &StoreDocument) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
