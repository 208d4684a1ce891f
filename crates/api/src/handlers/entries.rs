//! Handlers for the relational variant's entry table: a full unfiltered
//! select plus an arbitrary partial-field update for editable entries.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use distil_core::curation::validate_rating;
use distil_core::error::CoreError;
use distil_core::types::DbId;
use distil_core::view::NO_ENTRIES_MESSAGE;
use distil_db::models::completion::{Completion, UpdateEntry};
use distil_db::repositories::CompletionRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// GET /entries
///
/// Full table select, newest first. Degrades to empty on store errors.
pub async fn list_entries(
    State(state): State<AppState>,
) -> Json<ListResponse<Completion>> {
    match CompletionRepo::list_all(&state.pool).await {
        Ok(rows) => Json(ListResponse::ok(rows, NO_ENTRIES_MESSAGE)),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch entries");
            Json(ListResponse::degraded(format!(
                "Error fetching entries: {err}"
            )))
        }
    }
}

/// PATCH /entries/{id}
///
/// Partial-field overwrite for editable entry text and rating. Fields
/// absent from the body keep their stored value.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEntry>,
) -> AppResult<impl IntoResponse> {
    if let Some(rating) = input.rating {
        validate_rating(rating).map_err(AppError::Core)?;
    }

    let entry = CompletionRepo::update_entry(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entry",
            id,
        }))?;

    tracing::info!(entry_id = id, "Entry updated");

    Ok(Json(DataResponse { data: entry }))
}
