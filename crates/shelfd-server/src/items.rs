//! Item CRUD endpoints.
//!
//! Create takes the body as raw JSON rather than a typed struct so that a
//! missing, wrong-typed, or empty `name` all surface as the same 400
//! validation failure instead of an extractor rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{json, Value};

use shelfd_core::ShelfError;

use crate::app_state::AppState;
use crate::context::RequestContext;
use crate::error::ApiError;

const NAME_REQUIRED: &str = "Field 'name' is required and must be a string.";

pub async fn list(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "items": state.store().list() }))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Ok(Json(body)) = body else {
        return Err(ApiError::from_shelf(
            &ctx,
            ShelfError::Validation(NAME_REQUIRED.into()),
        ));
    };

    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            ApiError::from_shelf(&ctx, ShelfError::Validation(NAME_REQUIRED.into()))
        })?;

    let item = state
        .store()
        .create(name)
        .map_err(|e| ApiError::from_shelf(&ctx, e))?;

    Ok((StatusCode::CREATED, Json(json!({ "item": item }))))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let item = state
        .store()
        .get(&id)
        .map_err(|e| ApiError::from_shelf(&ctx, e))?;

    Ok(Json(json!({ "item": item })))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store()
        .remove(&id)
        .map_err(|e| ApiError::from_shelf(&ctx, e))?;

    Ok(StatusCode::NO_CONTENT)
}
