//! Fine-tuned model row and marketplace update DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use distil_core::types::{DbId, Timestamp};

/// A row from the `models` table: one fine-tuned model produced by the
/// external fine-tuning process, with its metrics and marketplace
/// sub-record. The dashboard mutates only `active` and `price`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FineTunedModel {
    pub id: DbId,
    pub name: String,
    pub base_model: String,
    pub template_hash: String,
    pub active: bool,

    // Metrics.
    pub accuracy: Option<f64>,
    pub avg_response_time_ms: Option<f64>,
    pub cost_per_token: Option<f64>,

    // Marketplace sub-record.
    pub published: bool,
    pub price: f64,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub rating: Option<f64>,
    pub subscriber_count: i64,
    pub revenue: f64,
    pub owner: Option<String>,

    pub created_at: Timestamp,
}

/// DTO for `PUT /models/{id}/active`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetModelActive {
    pub active: bool,
}

/// DTO for `PUT /models/{id}/price`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetModelPrice {
    pub price: f64,
}
