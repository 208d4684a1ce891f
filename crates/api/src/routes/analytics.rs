//! Route definitions for the analytics tab.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes mounted at `/analytics`.
///
/// ```text
/// GET /pipelines  -> pipeline_analytics
/// GET /models     -> model_analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pipelines", get(analytics::pipeline_analytics))
        .route("/models", get(analytics::model_analytics))
}
