//! Request instrumentation.
//!
//! One layer does the whole lifecycle bookkeeping: request-id assignment and
//! echo, the per-request counter increment (before dispatch), and exactly one
//! structured completion log per request. It wraps the entire router, so
//! errored requests and unmatched routes are counted and logged too.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::context::{RequestContext, REQUEST_ID_HEADER};

pub async fn track(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let supplied = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok());
    let ctx = RequestContext::new(supplied);

    let method = req.method().clone();
    // Full path including query string.
    let path = req.uri().to_string();

    req.extensions_mut().insert(ctx.clone());
    state.requests().inc();

    let start = Instant::now();
    let mut res = next.run(req).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    if let Ok(v) = HeaderValue::from_str(&ctx.request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, v);
    }

    tracing::info!(
        request_id = %ctx.request_id,
        method = %method,
        path = %path,
        status = res.status().as_u16(),
        duration_ms,
        "request completed"
    );

    res
}
