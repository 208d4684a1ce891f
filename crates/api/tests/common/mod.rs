use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use distil_api::cache::PipelineCache;
use distil_api::config::ServerConfig;
use distil_api::router::build_app_router;
use distil_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        pipeline_cache_ttl_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let pipeline_cache = Arc::new(PipelineCache::new(Duration::from_secs(
        config.pipeline_cache_ttl_secs,
    )));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pipeline_cache,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a bodyless POST request against the app.
pub async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a request with a JSON body against the app.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is valid JSON")
}

/// Insert a completion fixture the way the pipeline runner would.
pub async fn insert_completion(pool: &PgPool, namespace: &str, hash: &str, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO completions \
             (namespace, pipeline_hash, pipeline_name, input, output, cost) \
         VALUES ($1, $2, $3, 'What is Rust?', 'A systems language.', 0.0023) \
         RETURNING id",
    )
    .bind(namespace)
    .bind(hash)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("insert completion fixture")
}

/// Insert a model fixture the way the fine-tuning process would.
pub async fn insert_model(pool: &PgPool, name: &str, published: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO models \
             (name, base_model, template_hash, published, price, \
              accuracy, avg_response_time_ms, cost_per_token) \
         VALUES ($1, 'gpt-4o-mini', 'hash-a', $2, 9.99, 0.91, 140.0, 0.002) \
         RETURNING id",
    )
    .bind(name)
    .bind(published)
    .fetch_one(pool)
    .await
    .expect("insert model fixture")
}
