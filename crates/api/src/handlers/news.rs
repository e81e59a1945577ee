//! Handlers for the `/news` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::news::{CreateNews, UpdateNews};
use portal_db::repositories::NewsRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/news
///
/// Windowed listing with the `Content-Range` header describing the
/// returned slice.
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&NewsRepo::POLICY)?;
    let (total, rows) = NewsRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(NewsRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(news))
}

/// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    Json(input): Json<CreateNews>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title is required".to_string()).into());
    }
    let news = NewsRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// PUT /api/news/{id}
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNews>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(news))
}

/// DELETE /api/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = NewsRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "News", id }.into());
    }
    Ok(Json(json!({ "message": "News deleted successfully!" })))
}
