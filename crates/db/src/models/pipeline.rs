//! Aggregated pipeline model.

use serde::Serialize;
use sqlx::FromRow;

use distil_core::types::Timestamp;
use distil_core::view::CurationRow;

/// One pipeline group: the most recent completion sharing a
/// `(namespace, pipeline_hash)` pair, plus the group's member count.
///
/// Pipelines are never stored as rows of their own; this is the output
/// shape of the grouping query in `PipelineRepo::list`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PipelineSummary {
    pub namespace: String,
    pub pipeline_hash: String,
    pub pipeline_name: String,
    pub rating: Option<i16>,
    pub tags: Vec<String>,
    pub finetuned: bool,
    pub created_at: Timestamp,
    pub completion_count: i64,
}

impl CurationRow for PipelineSummary {
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
