//! Completion row model and update DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use distil_core::types::{DbId, Timestamp};
use distil_core::view::CurationRow;

/// A row from the `completions` table: one logged input/output pair from a
/// pipeline run. Created externally by the pipeline; the dashboard only
/// updates rating, tags, and the fine-tuned flag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Completion {
    pub id: DbId,
    pub namespace: String,
    pub pipeline_hash: String,
    pub pipeline_name: String,
    pub input: Option<String>,
    pub output: Option<String>,
    pub parameters: Option<serde_json::Value>,
    pub cost: Option<f64>,
    pub tokens_used: Option<i64>,
    pub rating: Option<i16>,
    pub tags: Vec<String>,
    pub finetuned: bool,
    pub created_at: Timestamp,
}

impl CurationRow for Completion {
    fn rating(&self) -> Option<i16> {
        self.rating
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn finetuned(&self) -> bool {
        self.finetuned
    }
    fn created_at(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}

/// DTO for the relational variant's partial entry update. Absent fields
/// keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntry {
    pub input: Option<String>,
    pub output: Option<String>,
    pub rating: Option<i16>,
}
