//! Repository for the `models` table.

use sqlx::PgPool;

use distil_core::types::DbId;

use crate::models::model::FineTunedModel;

/// Column list for models queries.
const COLUMNS: &str = "id, name, base_model, template_hash, active, accuracy, \
     avg_response_time_ms, cost_per_token, published, price, description, \
     tags, rating, subscriber_count, revenue, owner, created_at";

/// Read and single-field update operations for fine-tuned models.
///
/// Model rows are created by the external fine-tuning process; the
/// dashboard only toggles `active` and updates the marketplace `price`.
pub struct ModelRepo;

impl ModelRepo {
    /// Full unfiltered select, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FineTunedModel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM models ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, FineTunedModel>(&query)
            .fetch_all(pool)
            .await
    }

    /// Models published to the marketplace, newest first.
    pub async fn list_published(
        pool: &PgPool,
    ) -> Result<Vec<FineTunedModel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM models WHERE published \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, FineTunedModel>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a model by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FineTunedModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, FineTunedModel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the active flag, returning the updated row.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<FineTunedModel>, sqlx::Error> {
        let query = format!(
            "UPDATE models SET active = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FineTunedModel>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the marketplace price, returning the updated row.
    pub async fn set_price(
        pool: &PgPool,
        id: DbId,
        price: f64,
    ) -> Result<Option<FineTunedModel>, sqlx::Error> {
        let query = format!(
            "UPDATE models SET price = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FineTunedModel>(&query)
            .bind(id)
            .bind(price)
            .fetch_optional(pool)
            .await
    }
}
