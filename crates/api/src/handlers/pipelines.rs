//! Handlers for the pipeline listing view.
//!
//! The listing is the dashboard's entry point: one collapsible card per
//! pipeline group, filtered by the sidebar state. Reads go through the
//! time-boxed cache and degrade to an empty result on store errors.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use distil_core::types::Timestamp;
use distil_core::view::{self, NO_PIPELINES_MESSAGE};
use distil_db::models::pipeline::PipelineSummary;
use distil_db::repositories::PipelineRepo;

use crate::query::FilterParams;
use crate::response::ListResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Card payload
-------------------------------------------------------------------------- */

/// Summary header for one pipeline group's collapsible card.
#[derive(Debug, Serialize)]
pub struct PipelineCard {
    pub namespace: String,
    pub pipeline_hash: String,
    /// First eight hash characters, for the compact header line.
    pub hash_prefix: String,
    pub pipeline_name: String,
    pub completion_count: i64,
    pub rating: Option<i16>,
    pub rating_stars: String,
    pub tags: Vec<String>,
    pub tags_display: String,
    pub finetuned: bool,
    pub created_at: Timestamp,
}

impl From<&PipelineSummary> for PipelineCard {
    fn from(p: &PipelineSummary) -> Self {
        Self {
            namespace: p.namespace.clone(),
            pipeline_hash: p.pipeline_hash.clone(),
            hash_prefix: view::hash_prefix(&p.pipeline_hash).to_string(),
            pipeline_name: p.pipeline_name.clone(),
            completion_count: p.completion_count,
            rating: p.rating,
            rating_stars: view::rating_stars(p.rating),
            tags: p.tags.clone(),
            tags_display: view::tags_display(&p.tags),
            finetuned: p.finetuned,
            created_at: p.created_at,
        }
    }
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Load the pipeline listing, serving from cache within the TTL.
///
/// A store error is logged, surfaced as a warning string, and treated as
/// an empty result; the listing page must stay up whatever the store does.
pub(crate) async fn load_pipelines(
    state: &AppState,
) -> Result<Vec<PipelineSummary>, String> {
    if let Some(cached) = state.pipeline_cache.get().await {
        return Ok(cached);
    }

    match PipelineRepo::list(&state.pool).await {
        Ok(rows) => {
            state.pipeline_cache.store(rows.clone()).await;
            Ok(rows)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch pipelines");
            Err(format!("Error fetching pipelines: {err}"))
        }
    }
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /pipelines
///
/// List pipeline groups with the sidebar filters applied. Filtering runs
/// over the fetched rows, never inside the store query.
pub async fn list_pipelines(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<ListResponse<PipelineCard>> {
    let rows = match load_pipelines(&state).await {
        Ok(rows) => rows,
        Err(warning) => return Json(ListResponse::degraded(warning)),
    };

    let filters = params.into_filters();
    let cards: Vec<PipelineCard> = view::apply_filters(&filters, &rows)
        .into_iter()
        .map(PipelineCard::from)
        .collect();

    Json(ListResponse::ok(cards, NO_PIPELINES_MESSAGE))
}

/// POST /pipelines/refresh
///
/// Drop the cached listing so the next read fetches the latest pipelines.
pub async fn refresh_pipelines(State(state): State<AppState>) -> impl IntoResponse {
    state.pipeline_cache.invalidate().await;
    tracing::info!("Pipeline cache invalidated");
    StatusCode::NO_CONTENT
}
