//! Handlers for the `/centers` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::center::{CreateCenter, UpdateCenter};
use portal_db::repositories::CenterRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/centers
pub async fn list_centers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&CenterRepo::POLICY)?;
    let (total, rows) = CenterRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(CenterRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/centers/{id}
pub async fn get_center(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let center = CenterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Center", id }))?;
    Ok(Json(center))
}

/// POST /api/centers
pub async fn create_center(
    State(state): State<AppState>,
    Json(input): Json<CreateCenter>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let center = CenterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(center)))
}

/// PUT /api/centers/{id}
pub async fn update_center(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCenter>,
) -> AppResult<impl IntoResponse> {
    let center = CenterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Center", id }))?;
    Ok(Json(center))
}

/// DELETE /api/centers/{id}
pub async fn delete_center(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = CenterRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "Center", id }.into());
    }
    Ok(Json(json!({ "message": "Center deleted successfully!" })))
}
