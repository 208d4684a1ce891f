//! Route definitions for the relational variant's entry table.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Entry routes mounted at `/entries`.
///
/// ```text
/// GET   /       -> list_entries
/// PATCH /{id}   -> update_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::list_entries))
        .route("/{id}", patch(entries::update_entry))
}
