//! Integration tests for model management and marketplace browsing,
//! including the stubbed fine-tuning and subscription actions.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, insert_model, post, send_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_store_shows_no_models_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/models").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No models found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn marketplace_lists_only_published_models(pool: PgPool) {
    insert_model(&pool, "private", false).await;
    insert_model(&pool, "public", true).await;
    let app = common::build_test_app(pool);

    let body = body_json(get(app, "/api/v1/marketplace").await).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "public");
}

// ---------------------------------------------------------------------------
// Single-field updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn toggle_active_flag(pool: PgPool) {
    let id = insert_model(&pool, "support-bot-v1", false).await;
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/models/{id}/active"),
        json!({ "active": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["active"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_price(pool: PgPool) {
    let id = insert_model(&pool, "support-bot-v1", true).await;
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/models/{id}/price"),
        json!({ "price": 19.99 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["price"], 19.99);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_price_is_rejected_and_not_stored(pool: PgPool) {
    let id = insert_model(&pool, "support-bot-v1", true).await;
    let app = common::build_test_app(pool.clone());

    let response = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/models/{id}/price"),
        json!({ "price": -1.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let price: f64 = sqlx::query_scalar("SELECT price FROM models WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(price, 9.99);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn updating_missing_model_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::PUT,
        "/api/v1/models/9999/active",
        json!({ "active": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stubbed actions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn finetune_job_stub_reports_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/models/finetune-jobs",
        json!({ "template_hash": "hash-a", "base_model": "gpt-4o-mini" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Fine-tuning job started"));

    // No model row is created; the fine-tuning process is external.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM models")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn subscribe_stub_reports_success_for_published_model(pool: PgPool) {
    let id = insert_model(&pool, "public", true).await;
    let app = common::build_test_app(pool.clone());

    let response = post(app, &format!("/api/v1/marketplace/{id}/subscribe")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Subscribed to public");

    // Stub: subscriber count is untouched.
    let subs: i64 = sqlx::query_scalar("SELECT subscriber_count FROM models WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(subs, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn subscribing_to_unpublished_model_returns_404(pool: PgPool) {
    let id = insert_model(&pool, "private", false).await;
    let app = common::build_test_app(pool);

    let response = post(app, &format!("/api/v1/marketplace/{id}/subscribe")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
