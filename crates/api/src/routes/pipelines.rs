//! Route definitions for the pipeline listing view.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{completions, pipelines};
use crate::state::AppState;

/// Pipeline routes mounted at the API root.
///
/// ```text
/// GET  /pipelines                      -> list_pipelines
/// POST /pipelines/refresh              -> refresh_pipelines
/// GET  /pipelines/{hash}/completions   -> list_completions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pipelines", get(pipelines::list_pipelines))
        .route("/pipelines/refresh", post(pipelines::refresh_pipelines))
        .route(
            "/pipelines/{hash}/completions",
            get(completions::list_completions),
        )
}
