//! Handlers for completion cards and the three curation mutations
//! (append tag, set rating, mark fine-tuned).
//!
//! Each mutation is a single store round trip; the client re-fetches the
//! view after a success, so handlers return the updated row as written.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use distil_core::curation::{validate_rating, validate_tag};
use distil_core::error::CoreError;
use distil_core::types::{DbId, Timestamp};
use distil_core::view::{self, NO_COMPLETIONS_MESSAGE};
use distil_db::models::completion::Completion;
use distil_db::repositories::CompletionRepo;

use crate::error::{AppError, AppResult};
use crate::query::CompletionListParams;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Card payload
-------------------------------------------------------------------------- */

/// One completion card inside a pipeline's disclosure.
#[derive(Debug, Serialize)]
pub struct CompletionCard {
    pub id: DbId,
    pub namespace: String,
    pub pipeline_hash: String,
    pub pipeline_name: String,
    pub input: Option<String>,
    pub output: Option<String>,
    pub parameters: Option<serde_json::Value>,
    pub cost: Option<f64>,
    /// Dollar-formatted cost for direct display, e.g. `$0.0023`.
    pub cost_display: Option<String>,
    pub tokens_used: Option<i64>,
    pub rating: Option<i16>,
    pub rating_stars: String,
    pub tags: Vec<String>,
    pub tags_display: String,
    pub finetuned: bool,
    /// The fine-tune button is hidden once the flag is set.
    pub can_finetune: bool,
    pub created_at: Timestamp,
}

impl From<&Completion> for CompletionCard {
    fn from(c: &Completion) -> Self {
        Self {
            id: c.id,
            namespace: c.namespace.clone(),
            pipeline_hash: c.pipeline_hash.clone(),
            pipeline_name: c.pipeline_name.clone(),
            input: c.input.clone(),
            output: c.output.clone(),
            parameters: c.parameters.clone(),
            cost: c.cost,
            cost_display: view::format_cost(c.cost),
            tokens_used: c.tokens_used,
            rating: c.rating,
            rating_stars: view::rating_stars(c.rating),
            tags: c.tags.clone(),
            tags_display: view::tags_display(&c.tags),
            finetuned: c.finetuned,
            can_finetune: !c.finetuned,
            created_at: c.created_at,
        }
    }
}

/* --------------------------------------------------------------------------
Request bodies
-------------------------------------------------------------------------- */

/// Body for `POST /completions/{id}/tags`.
#[derive(Debug, Deserialize)]
pub struct AddTagRequest {
    pub tag: String,
}

/// Body for `PUT /completions/{id}/rating`.
#[derive(Debug, Deserialize)]
pub struct SetRatingRequest {
    pub rating: i16,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn completion_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Completion",
        id,
    })
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /pipelines/{hash}/completions?namespace=...
///
/// List one pipeline group's completions, newest first, one page at
/// most, with the sidebar filters applied to the fetched rows. A store
/// error degrades to an empty result with a warning.
pub async fn list_completions(
    State(state): State<AppState>,
    Path(pipeline_hash): Path<String>,
    Query(params): Query<CompletionListParams>,
) -> Json<ListResponse<CompletionCard>> {
    let (namespace, filters) = params.into_filters();

    let rows =
        match CompletionRepo::list_for_pipeline(&state.pool, &namespace, &pipeline_hash)
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(error = %err, %pipeline_hash, "Failed to fetch completions");
                return Json(ListResponse::degraded(format!(
                    "Error fetching completions: {err}"
                )));
            }
        };

    let cards: Vec<CompletionCard> = view::apply_filters(&filters, &rows)
        .into_iter()
        .map(CompletionCard::from)
        .collect();

    Json(ListResponse::ok(cards, NO_COMPLETIONS_MESSAGE))
}

/// POST /completions/{id}/tags
///
/// Append a tag to a completion's tag set. Validation runs before any
/// store call; the append itself is atomic and idempotent.
pub async fn add_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddTagRequest>,
) -> AppResult<impl IntoResponse> {
    validate_tag(&input.tag).map_err(AppError::Core)?;

    let completion = CompletionRepo::add_tag(&state.pool, id, &input.tag)
        .await?
        .ok_or_else(|| completion_not_found(id))?;

    tracing::info!(completion_id = id, tag = %input.tag, "Tag added");

    Ok(Json(DataResponse { data: completion }))
}

/// PUT /completions/{id}/rating
///
/// Overwrite a completion's rating with an integer in [1,5].
pub async fn set_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetRatingRequest>,
) -> AppResult<impl IntoResponse> {
    validate_rating(input.rating).map_err(AppError::Core)?;

    let completion = CompletionRepo::set_rating(&state.pool, id, input.rating)
        .await?
        .ok_or_else(|| completion_not_found(id))?;

    tracing::info!(completion_id = id, rating = input.rating, "Completion rated");

    Ok(Json(DataResponse { data: completion }))
}

/// POST /completions/{id}/finetune
///
/// Mark a completion as selected for fine-tuning. The flag only ever
/// moves false -> true.
pub async fn mark_finetuned(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let completion = CompletionRepo::mark_finetuned(&state.pool, id)
        .await?
        .ok_or_else(|| completion_not_found(id))?;

    tracing::info!(completion_id = id, "Completion marked as finetuned");

    Ok(Json(DataResponse { data: completion }))
}
