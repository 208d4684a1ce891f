//! Route definitions for marketplace browsing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::marketplace;
use crate::state::AppState;

/// Marketplace routes mounted at `/marketplace`.
///
/// ```text
/// GET  /                  -> list_marketplace
/// POST /{id}/subscribe    -> subscribe (stub)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(marketplace::list_marketplace))
        .route("/{id}/subscribe", post(marketplace::subscribe))
}
