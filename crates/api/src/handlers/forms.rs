//! Handlers for the `/forms` resource.
//!
//! List and detail responses embed the services attached to each form.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::form::{CreateForm, UpdateForm};
use portal_db::repositories::FormRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/forms
pub async fn list_forms(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&FormRepo::POLICY)?;
    let (total, rows) = FormRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(FormRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/forms/{id}
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let form = FormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    Ok(Json(form))
}

/// POST /api/forms
pub async fn create_form(
    State(state): State<AppState>,
    Json(input): Json<CreateForm>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let form = FormRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(form)))
}

/// PUT /api/forms/{id}
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateForm>,
) -> AppResult<impl IntoResponse> {
    let form = FormRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    Ok(Json(form))
}

/// DELETE /api/forms/{id}
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = FormRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "Form", id }.into());
    }
    Ok(Json(json!({ "message": "Form deleted successfully!" })))
}
