//! Handlers for the analytics tab.
//!
//! Charts are derived in `distil_core::analytics` from the same rows the
//! listing already loads; the handlers only assemble the chart payloads
//! and attach no-data messages where a chart has nothing to show.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use distil_core::analytics::{
    self, ModelMetricsSample, ModelPoint, RatingHistogram, TagCount, UsageSample,
    UsageTimeline, NO_METRICS_MESSAGE, NO_RATINGS_MESSAGE, NO_TAGS_MESSAGE,
    NO_USAGE_MESSAGE,
};
use distil_db::repositories::ModelRepo;

use crate::handlers::pipelines::load_pipelines;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Response payloads
-------------------------------------------------------------------------- */

/// Chart payloads for the pipeline analytics view. Each chart is either
/// present or replaced by its message; computing from an empty store is
/// not an error.
#[derive(Debug, Serialize)]
pub struct PipelineAnalyticsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_histogram: Option<RatingHistogram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_message: Option<String>,

    pub tag_frequency: Vec<TagCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_timeline: Option<UsageTimeline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Cross-model comparison payload (second variant).
#[derive(Debug, Serialize)]
pub struct ModelAnalyticsResponse {
    pub scatter: Vec<ModelPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /analytics/pipelines
///
/// Rating histogram, tag frequency, and usage timeline over the loaded
/// pipeline groups. A store error degrades every chart to its no-data
/// message plus a warning.
pub async fn pipeline_analytics(
    State(state): State<AppState>,
) -> Json<PipelineAnalyticsResponse> {
    let (rows, warning) = match load_pipelines(&state).await {
        Ok(rows) => (rows, None),
        Err(warning) => (Vec::new(), Some(warning)),
    };

    let rating_histogram = analytics::rating_histogram(rows.iter().map(|p| p.rating));
    let tag_frequency = analytics::tag_frequency(rows.iter().map(|p| p.tags.as_slice()));

    let samples: Vec<UsageSample> = rows
        .iter()
        .map(|p| UsageSample {
            name: p.pipeline_name.clone(),
            hash: p.pipeline_hash.clone(),
            count: p.completion_count,
            timestamp: Some(p.created_at),
        })
        .collect();
    let usage_timeline = analytics::usage_timeline(&samples);

    let rating_message = rating_histogram
        .is_none()
        .then(|| NO_RATINGS_MESSAGE.to_string());
    let tags_message = tag_frequency
        .is_empty()
        .then(|| NO_TAGS_MESSAGE.to_string());
    let usage_message = usage_timeline
        .is_none()
        .then(|| NO_USAGE_MESSAGE.to_string());

    Json(PipelineAnalyticsResponse {
        rating_histogram,
        rating_message,
        tag_frequency,
        tags_message,
        usage_timeline,
        usage_message,
        warning,
    })
}

/// GET /analytics/models
///
/// Response-time vs accuracy scatter across fine-tuned models, point
/// size tracking cost per token. Models missing either axis metric are
/// skipped.
pub async fn model_analytics(State(state): State<AppState>) -> Json<ModelAnalyticsResponse> {
    let (models, warning) = match ModelRepo::list(&state.pool).await {
        Ok(models) => (models, None),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch models for analytics");
            (Vec::new(), Some(format!("Error fetching models: {err}")))
        }
    };

    let samples: Vec<ModelMetricsSample> = models
        .iter()
        .map(|m| ModelMetricsSample {
            name: m.name.clone(),
            accuracy: m.accuracy,
            avg_response_time_ms: m.avg_response_time_ms,
            cost_per_token: m.cost_per_token,
        })
        .collect();

    let scatter = analytics::model_scatter(&samples);
    let message = scatter.is_empty().then(|| NO_METRICS_MESSAGE.to_string());

    Json(ModelAnalyticsResponse {
        scatter,
        message,
        warning,
    })
}
