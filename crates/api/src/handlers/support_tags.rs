//! Handlers for the `/tagsSupports` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::support::{CreateTitled, UpdateTitled};
use portal_db::repositories::SupportTagRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/tagsSupports
pub async fn list_support_tags(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&SupportTagRepo::POLICY)?;
    let (total, rows) = SupportTagRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(SupportTagRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/tagsSupports/{id}
///
/// Embeds the support measures carrying the tag.
pub async fn get_support_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = SupportTagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "TagsSupport", id }))?;
    Ok(Json(tag))
}

/// POST /api/tagsSupports
pub async fn create_support_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTitled>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let tag = SupportTagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// PUT /api/tagsSupports/{id}
pub async fn update_support_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTitled>,
) -> AppResult<impl IntoResponse> {
    let tag = SupportTagRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "TagsSupport", id }))?;
    Ok(Json(tag))
}

/// DELETE /api/tagsSupports/{id}
pub async fn delete_support_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = SupportTagRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "TagsSupport", id }.into());
    }
    Ok(Json(json!({ "message": "TagsSupport deleted successfully!" })))
}
