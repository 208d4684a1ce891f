//! Handlers for fine-tuned model management.
//!
//! Model rows are created by the external fine-tuning process; this
//! surface lists them and performs the two single-field updates the
//! dashboard exposes. Job submission itself is a stub that only reports
//! success -- there is no job system behind it.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use distil_core::curation::validate_price;
use distil_core::error::CoreError;
use distil_core::types::DbId;
use distil_core::view::NO_MODELS_MESSAGE;
use distil_db::models::model::{FineTunedModel, SetModelActive, SetModelPrice};
use distil_db::repositories::ModelRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request bodies
-------------------------------------------------------------------------- */

/// Body for `POST /models/finetune-jobs`.
#[derive(Debug, Deserialize)]
pub struct StartFinetuneRequest {
    pub template_hash: String,
    pub base_model: String,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn model_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Model", id })
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /models
///
/// Full unfiltered select, newest first. Degrades to empty on store
/// errors.
pub async fn list_models(
    State(state): State<AppState>,
) -> Json<ListResponse<FineTunedModel>> {
    match ModelRepo::list(&state.pool).await {
        Ok(rows) => Json(ListResponse::ok(rows, NO_MODELS_MESSAGE)),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch models");
            Json(ListResponse::degraded(format!(
                "Error fetching models: {err}"
            )))
        }
    }
}

/// PUT /models/{id}/active
///
/// Toggle whether a model serves requests.
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetModelActive>,
) -> AppResult<impl IntoResponse> {
    let model = ModelRepo::set_active(&state.pool, id, input.active)
        .await?
        .ok_or_else(|| model_not_found(id))?;

    tracing::info!(model_id = id, active = input.active, "Model active flag updated");

    Ok(Json(DataResponse { data: model }))
}

/// PUT /models/{id}/price
///
/// Update a model's marketplace price.
pub async fn set_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetModelPrice>,
) -> AppResult<impl IntoResponse> {
    validate_price(input.price).map_err(AppError::Core)?;

    let model = ModelRepo::set_price(&state.pool, id, input.price)
        .await?
        .ok_or_else(|| model_not_found(id))?;

    tracing::info!(model_id = id, price = input.price, "Model price updated");

    Ok(Json(DataResponse { data: model }))
}

/// POST /models/finetune-jobs
///
/// Submit a fine-tuning job for a template. Stub: reports success
/// without creating anything; the fine-tuning process is external.
pub async fn start_finetune_job(
    Json(input): Json<StartFinetuneRequest>,
) -> AppResult<impl IntoResponse> {
    if input.template_hash.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "template_hash cannot be empty".to_string(),
        )));
    }

    tracing::info!(
        template_hash = %input.template_hash,
        base_model = %input.base_model,
        "Fine-tuning job requested (stub, no job system)"
    );

    Ok(Json(MessageResponse {
        message: format!(
            "Fine-tuning job started for template {} on {}",
            input.template_hash, input.base_model
        ),
    }))
}
