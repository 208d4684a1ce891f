//! Integration tests for the curation mutations on completions:
//! tag append idempotence, rating overwrite, fine-tuned flag
//! monotonicity, and the relational variant's partial entry update.

use sqlx::PgPool;

use distil_db::models::completion::UpdateEntry;
use distil_db::repositories::CompletionRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a completion row the way the external pipeline runner would.
/// The dashboard itself never creates completions, so tests write the
/// fixture rows directly.
async fn insert_completion(
    pool: &PgPool,
    namespace: &str,
    hash: &str,
    name: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO completions \
             (namespace, pipeline_hash, pipeline_name, input, output, cost) \
         VALUES ($1, $2, $3, 'What is Rust?', 'A systems language.', 0.0023) \
         RETURNING id",
    )
    .bind(namespace)
    .bind(hash)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("insert completion fixture")
}

// ---------------------------------------------------------------------------
// Tag append
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_tag_appends_once(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    let row = CompletionRepo::add_tag(&pool, id, "verified")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.tags, vec!["verified"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_tag_twice_leaves_tag_set_unchanged(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    CompletionRepo::add_tag(&pool, id, "verified").await.unwrap();
    let row = CompletionRepo::add_tag(&pool, id, "verified")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.tags, vec!["verified"], "no duplicate after second call");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_tag_preserves_existing_tags(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    CompletionRepo::add_tag(&pool, id, "alpha").await.unwrap();
    let row = CompletionRepo::add_tag(&pool, id, "beta")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.tags, vec!["alpha", "beta"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_tag_to_missing_row_returns_none(pool: PgPool) {
    let row = CompletionRepo::add_tag(&pool, 9999, "verified").await.unwrap();
    assert!(row.is_none());
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_rating_overwrites(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    let row = CompletionRepo::set_rating(&pool, id, 3).await.unwrap().unwrap();
    assert_eq!(row.rating, Some(3));

    let row = CompletionRepo::set_rating(&pool, id, 5).await.unwrap().unwrap();
    assert_eq!(row.rating, Some(5));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_rating_on_missing_row_returns_none(pool: PgPool) {
    let row = CompletionRepo::set_rating(&pool, 9999, 4).await.unwrap();
    assert!(row.is_none());
}

// ---------------------------------------------------------------------------
// Fine-tuned flag
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_finetuned_is_idempotent(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    let row = CompletionRepo::mark_finetuned(&pool, id).await.unwrap().unwrap();
    assert!(row.finetuned);

    // Repeated calls keep the flag true.
    let row = CompletionRepo::mark_finetuned(&pool, id).await.unwrap().unwrap();
    assert!(row.finetuned);
}

// ---------------------------------------------------------------------------
// Partial entry update (relational variant)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_entry_overwrites_only_provided_fields(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    let update = UpdateEntry {
        output: Some("A better answer.".to_string()),
        rating: Some(4),
        ..Default::default()
    };
    let row = CompletionRepo::update_entry(&pool, id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.output.as_deref(), Some("A better answer."));
    assert_eq!(row.rating, Some(4));
    // Absent field keeps its stored value.
    assert_eq!(row.input.as_deref(), Some("What is Rust?"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_entry_with_empty_dto_changes_nothing(pool: PgPool) {
    let id = insert_completion(&pool, "prod", "abc123", "summarize").await;

    let row = CompletionRepo::update_entry(&pool, id, &UpdateEntry::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.input.as_deref(), Some("What is Rust?"));
    assert_eq!(row.output.as_deref(), Some("A systems language."));
    assert_eq!(row.rating, None);
}
