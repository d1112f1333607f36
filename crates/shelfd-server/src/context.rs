//! Per-request context injected by the instrumentation middleware.

use uuid::Uuid;

/// Header used to supply and echo the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request-scoped data made available to handlers and the error boundary.
/// Never shared across requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    /// Reuse a caller-supplied id verbatim, or mint a fresh uuid.
    pub fn new(supplied: Option<&str>) -> Self {
        let request_id = match supplied {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        Self { request_id }
    }
}
