//! Axum router wiring.
//!
//! The instrumentation layer wraps the whole router so every request is
//! counted and logged, including ones that match no route.

use axum::routing::get;
use axum::{middleware, Router};

use crate::app_state::AppState;
use crate::{items, middleware as instrumentation, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/live", get(ops::live))
        .route("/ready", get(ops::ready))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/items", get(items::list).post(items::create))
        .route("/items/:id", get(items::get).delete(items::delete))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            instrumentation::track,
        ))
        .with_state(state)
}
