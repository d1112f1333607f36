//! Operational HTTP endpoints.
//!
//! - `/live`    : liveness (no checks, answers "is the process alive")
//! - `/ready`   : readiness with per-subsystem check breakdown
//! - `/health`  : legacy alias for liveness
//! - `/metrics` : point-in-time JSON snapshot, no history

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Map, Value};

use crate::app_state::AppState;

pub async fn live() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks = Map::new();
    for check in state.readiness_checks() {
        checks.insert(check.name().to_string(), Value::from(check.check().await));
    }

    Json(json!({ "status": "ok", "checks": checks }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "requestCount": state.requests().total(),
        "itemsCount": state.store().len(),
        "uptimeSeconds": state.uptime_seconds(),
    }))
}
