use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

use super::timestamp;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let uptime = (Utc::now() - state.started).num_seconds().max(0);

    Json(json!({
        "status": "healthy",
        "version": "3.0.0",
        "server": "GraphSmile Mobile Backend",
        "timestamp": timestamp(),
        "uptime": format!("{uptime}s"),
    }))
}
