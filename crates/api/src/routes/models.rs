//! Route definitions for model management.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::models;
use crate::state::AppState;

/// Model routes mounted at `/models`.
///
/// ```text
/// GET  /                 -> list_models
/// PUT  /{id}/active      -> set_active
/// PUT  /{id}/price       -> set_price
/// POST /finetune-jobs    -> start_finetune_job (stub)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(models::list_models))
        .route("/{id}/active", put(models::set_active))
        .route("/{id}/price", put(models::set_price))
        .route("/finetune-jobs", post(models::start_finetune_job))
}
