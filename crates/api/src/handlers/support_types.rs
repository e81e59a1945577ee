//! Handlers for the `/typeSupports` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::support::{CreateTitled, UpdateTitled};
use portal_db::repositories::SupportTypeRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/typeSupports
pub async fn list_support_types(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&SupportTypeRepo::POLICY)?;
    let (total, rows) = SupportTypeRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(SupportTypeRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/typeSupports/{id}
///
/// Embeds the support measures carrying the type.
pub async fn get_support_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let support_type = SupportTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "TypeSupport", id }))?;
    Ok(Json(support_type))
}

/// POST /api/typeSupports
pub async fn create_support_type(
    State(state): State<AppState>,
    Json(input): Json<CreateTitled>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let support_type = SupportTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(support_type)))
}

/// PUT /api/typeSupports/{id}
pub async fn update_support_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTitled>,
) -> AppResult<impl IntoResponse> {
    let support_type = SupportTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "TypeSupport", id }))?;
    Ok(Json(support_type))
}

/// DELETE /api/typeSupports/{id}
pub async fn delete_support_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = SupportTypeRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "TypeSupport", id }.into());
    }
    Ok(Json(json!({ "message": "TypeSupport deleted successfully!" })))
}
