//! Aggregation query for the pipeline listing.

use sqlx::PgPool;

use crate::models::pipeline::PipelineSummary;

/// Read-only grouping of completions into pipelines.
pub struct PipelineRepo;

impl PipelineRepo {
    /// One row per `(namespace, pipeline_hash)` group across all
    /// namespaces: the group's most recent completion as representative,
    /// plus its member count.
    ///
    /// Sorted by representative timestamp descending, member count
    /// descending as tiebreak.
    pub async fn list(pool: &PgPool) -> Result<Vec<PipelineSummary>, sqlx::Error> {
        sqlx::query_as::<_, PipelineSummary>(
            "SELECT namespace, pipeline_hash, pipeline_name, rating, tags, \
                    finetuned, created_at, completion_count \
             FROM ( \
                 SELECT DISTINCT ON (namespace, pipeline_hash) \
                        namespace, pipeline_hash, pipeline_name, rating, tags, \
                        finetuned, created_at, \
                        COUNT(*) OVER (PARTITION BY namespace, pipeline_hash) \
                            AS completion_count \
                 FROM completions \
                 ORDER BY namespace, pipeline_hash, created_at DESC, id DESC \
             ) latest \
             ORDER BY created_at DESC, completion_count DESC",
        )
        .fetch_all(pool)
        .await
    }
}
