pub mod analytics;
pub mod completions;
pub mod entries;
pub mod health;
pub mod marketplace;
pub mod models;
pub mod pipelines;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pipelines                        list with sidebar filters (GET)
/// /pipelines/refresh                clear the listing cache (POST)
/// /pipelines/{hash}/completions     one group's completion cards (GET)
///
/// /completions/{id}/tags            append tag (POST)
/// /completions/{id}/rating          set rating (PUT)
/// /completions/{id}/finetune        mark fine-tuned (POST)
///
/// /entries                          full table select (GET)
/// /entries/{id}                     partial-field update (PATCH)
///
/// /models                           list models (GET)
/// /models/{id}/active               toggle active flag (PUT)
/// /models/{id}/price                update price (PUT)
/// /models/finetune-jobs             submit job (POST, stub)
///
/// /marketplace                      browse published models (GET)
/// /marketplace/{id}/subscribe       subscribe (POST, stub)
///
/// /analytics/pipelines              rating/tag/usage charts (GET)
/// /analytics/models                 cross-model scatter (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(pipelines::router())
        .merge(completions::router())
        .nest("/entries", entries::router())
        .nest("/models", models::router())
        .nest("/marketplace", marketplace::router())
        .nest("/analytics", analytics::router())
}
