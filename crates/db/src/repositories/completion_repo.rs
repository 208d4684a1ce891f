//! Repository for the `completions` table.

use sqlx::PgPool;

use distil_core::curation::COMPLETION_PAGE_SIZE;
use distil_core::types::DbId;

use crate::models::completion::{Completion, UpdateEntry};

/// Column list for completions queries.
const COLUMNS: &str = "id, namespace, pipeline_hash, pipeline_name, input, output, \
     parameters, cost, tokens_used, rating, tags, finetuned, created_at";

/// Read and curation-update operations for logged completions.
///
/// The dashboard never inserts or deletes completions; rows are owned by
/// the pipeline that produced them.
pub struct CompletionRepo;

impl CompletionRepo {
    /// List completions belonging to one pipeline group within one
    /// namespace, newest first, capped at one page.
    pub async fn list_for_pipeline(
        pool: &PgPool,
        namespace: &str,
        pipeline_hash: &str,
    ) -> Result<Vec<Completion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM completions \
             WHERE namespace = $1 AND pipeline_hash = $2 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3"
        );
        sqlx::query_as::<_, Completion>(&query)
            .bind(namespace)
            .bind(pipeline_hash)
            .bind(COMPLETION_PAGE_SIZE)
            .fetch_all(pool)
            .await
    }

    /// Full unfiltered select, newest first (the relational variant's
    /// entry listing).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Completion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM completions ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Completion>(&query).fetch_all(pool).await
    }

    /// Find a completion by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Completion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM completions WHERE id = $1");
        sqlx::query_as::<_, Completion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Append a tag to a completion's tag set, idempotently.
    ///
    /// The append is a single server-side UPDATE guarded by
    /// `NOT (tag = ANY(tags))`, so concurrent taggers cannot lose each
    /// other's updates and a duplicate tag is a no-op. Returns the row
    /// after the update.
    pub async fn add_tag(
        pool: &PgPool,
        id: DbId,
        tag: &str,
    ) -> Result<Option<Completion>, sqlx::Error> {
        sqlx::query(
            "UPDATE completions \
             SET tags = array_append(tags, $2) \
             WHERE id = $1 AND NOT ($2 = ANY(tags))",
        )
        .bind(id)
        .bind(tag)
        .execute(pool)
        .await?;

        // Zero rows affected means either "already tagged" or "no such
        // row"; the re-read distinguishes the two.
        Self::find_by_id(pool, id).await
    }

    /// Overwrite a completion's rating, returning the updated row.
    pub async fn set_rating(
        pool: &PgPool,
        id: DbId,
        rating: i16,
    ) -> Result<Option<Completion>, sqlx::Error> {
        let query = format!(
            "UPDATE completions SET rating = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Completion>(&query)
            .bind(id)
            .bind(rating)
            .fetch_optional(pool)
            .await
    }

    /// Set the fine-tuned flag. The flag only ever moves false -> true;
    /// repeated calls are no-ops.
    pub async fn mark_finetuned(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Completion>, sqlx::Error> {
        let query = format!(
            "UPDATE completions SET finetuned = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Completion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partial-field overwrite for the relational variant's editable
    /// entries. Fields absent from the DTO keep their stored value.
    pub async fn update_entry(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEntry,
    ) -> Result<Option<Completion>, sqlx::Error> {
        let query = format!(
            "UPDATE completions \
             SET input = COALESCE($2, input), \
                 output = COALESCE($3, output), \
                 rating = COALESCE($4, rating) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Completion>(&query)
            .bind(id)
            .bind(&input.input)
            .bind(&input.output)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }
}
