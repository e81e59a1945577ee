//! Handlers for the `/services` resource.
//!
//! List and detail responses embed the service's centers and form.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::service::{CreateService, UpdateService};
use portal_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/services
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&ServiceRepo::POLICY)?;
    let (total, rows) = ServiceRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(ServiceRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Service", id }))?;
    Ok(Json(service))
}

/// POST /api/services
pub async fn create_service(
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() || input.description.trim().is_empty() {
        return Err(
            CoreError::Validation("title and description are required".to_string()).into(),
        );
    }
    let service = ServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/services/{id}
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Service", id }))?;
    Ok(Json(service))
}

/// DELETE /api/services/{id}
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ServiceRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "Service", id }.into());
    }
    Ok(Json(json!({ "message": "Service deleted successfully!" })))
}
