//! Handlers for browsing the model marketplace.
//!
//! Only published models appear here. Subscribing is a stub that
//! reports success without touching the store.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use distil_core::error::CoreError;
use distil_core::types::DbId;
use distil_db::models::model::FineTunedModel;
use distil_db::repositories::ModelRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ListResponse, MessageResponse};
use crate::state::AppState;

/// Shown when no model has been published for sale yet.
const NO_LISTINGS_MESSAGE: &str = "No models published to the marketplace yet";

/// GET /marketplace
///
/// Browse published models, newest first. Degrades to empty on store
/// errors.
pub async fn list_marketplace(
    State(state): State<AppState>,
) -> Json<ListResponse<FineTunedModel>> {
    match ModelRepo::list_published(&state.pool).await {
        Ok(rows) => Json(ListResponse::ok(rows, NO_LISTINGS_MESSAGE)),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch marketplace listings");
            Json(ListResponse::degraded(format!(
                "Error fetching marketplace listings: {err}"
            )))
        }
    }
}

/// POST /marketplace/{id}/subscribe
///
/// Subscribe to a published model. Stub: verifies the listing exists and
/// reports success; there is no billing or subscription system behind it.
pub async fn subscribe(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let model = ModelRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|m| m.published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Marketplace listing",
            id,
        }))?;

    tracing::info!(model_id = id, "Marketplace subscription requested (stub)");

    Ok(Json(MessageResponse {
        message: format!("Subscribed to {}", model.name),
    }))
}
