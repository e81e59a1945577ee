//! Handlers for the `/supports` resource (support measures).
//!
//! List and detail responses embed the measure's type and tags.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::support::{CreateSupport, UpdateSupport};
use portal_db::repositories::SupportRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/supports
pub async fn list_supports(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&SupportRepo::POLICY)?;
    let (total, rows) = SupportRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(SupportRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/supports/{id}
pub async fn get_support(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let support = SupportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Support", id }))?;
    Ok(Json(support))
}

/// POST /api/supports
pub async fn create_support(
    State(state): State<AppState>,
    Json(input): Json<CreateSupport>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let support = SupportRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(support)))
}

/// PUT /api/supports/{id}
pub async fn update_support(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupport>,
) -> AppResult<impl IntoResponse> {
    let support = SupportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Support", id }))?;
    Ok(Json(support))
}

/// DELETE /api/supports/{id}
pub async fn delete_support(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = SupportRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "Support", id }.into());
    }
    Ok(Json(json!({ "message": "Support deleted successfully!" })))
}
