//! Handlers for the `/maps` resource (per-region business counters).

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::map::{CreateRegionMap, UpdateRegionMap};
use portal_db::repositories::MapRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/maps
///
/// A rangeless request serves every region (see `MapRepo::POLICY`).
pub async fn list_maps(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&MapRepo::POLICY)?;
    let (total, rows) = MapRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(MapRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/maps/{id}
pub async fn get_map(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let map = MapRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Map", id }))?;
    Ok(Json(map))
}

/// POST /api/maps
pub async fn create_map(
    State(state): State<AppState>,
    Json(input): Json<CreateRegionMap>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let map = MapRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(map)))
}

/// PUT /api/maps/{id}
pub async fn update_map(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegionMap>,
) -> AppResult<impl IntoResponse> {
    let map = MapRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Map", id }))?;
    Ok(Json(map))
}

/// DELETE /api/maps/{id}
pub async fn delete_map(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = MapRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "Map", id }.into());
    }
    Ok(Json(json!({ "message": "Map deleted successfully!" })))
}
