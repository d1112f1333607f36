//! Error boundary.
//!
//! Handlers return `Result<_, ApiError>` and the conversion below is the
//! single place where failure kinds become status codes and the uniform
//! `{error:{message, requestId}}` body. Internal failures are logged with
//! full detail server-side; the client only ever sees the generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use shelfd_core::error::ErrorKind;
use shelfd_core::ShelfError;

use crate::context::RequestContext;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    request_id: String,
}

impl ApiError {
    /// Translate a domain error, attaching the id of the request it failed in.
    pub fn from_shelf(ctx: &RequestContext, err: ShelfError) -> Self {
        let (status, message) = match err.kind() {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.to_string()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
            ErrorKind::Internal => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    error = %err,
                    "unhandled failure"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        Self {
            status,
            message,
            request_id: ctx.request_id.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "message": self.message,
                "requestId": self.request_id,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_original_message() {
        let ctx = RequestContext::new(Some("rid-1"));
        let err = ApiError::from_shelf(&ctx, ShelfError::Validation("bad field".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "bad field");
        assert_eq!(err.request_id, "rid-1");
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let ctx = RequestContext::new(None);
        let err = ApiError::from_shelf(&ctx, ShelfError::Internal("db on fire".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal Server Error");
    }
}
