use std::sync::Arc;

use crate::cache::PipelineCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: distil_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Time-boxed cache of the pipeline listing.
    pub pipeline_cache: Arc<PipelineCache>,
}
