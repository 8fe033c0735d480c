mod analytics;
mod health;
mod metrics;
mod model_info;
mod predict;
mod video;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::state::AppState;

/// Route table, also logged at startup.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("POST", "/predict"),
    ("POST", "/batch-predict"),
    ("POST", "/analyze-video"),
    ("GET", "/metrics"),
    ("GET", "/analytics"),
    ("GET", "/model-info"),
    ("GET", "/demo"),
    ("GET", "/cache-stats"),
    ("POST", "/clear-cache"),
    ("GET", "/test-all"),
];

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/predict", post(predict::predict))
        .route("/batch-predict", post(predict::batch_predict))
        .route("/analyze-video", post(video::analyze_video))
        .route("/metrics", get(metrics::metrics))
        .route("/analytics", get(analytics::analytics))
        .route("/model-info", get(model_info::model_info))
        .route("/demo", get(model_info::demo))
        .route("/cache-stats", get(metrics::cache_stats))
        .route("/clear-cache", post(metrics::clear_cache))
        .route("/test-all", get(model_info::test_all))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}

pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Round to 1 decimal, used by the synthetic percentage fields.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
