//! Route definitions for the curation mutations on completions.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::completions;
use crate::state::AppState;

/// Mutation routes mounted at the API root.
///
/// ```text
/// POST /completions/{id}/tags      -> add_tag
/// PUT  /completions/{id}/rating    -> set_rating
/// POST /completions/{id}/finetune  -> mark_finetuned
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/completions/{id}/tags", post(completions::add_tag))
        .route("/completions/{id}/rating", put(completions::set_rating))
        .route("/completions/{id}/finetune", post(completions::mark_finetuned))
}
