//! Handlers for the `/bids` resource (inbound requests from the public
//! site).

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::bid::{CreateBid, UpdateBid};
use portal_db::repositories::BidRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/bids
pub async fn list_bids(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve(&BidRepo::POLICY)?;
    let (total, rows) = BidRepo::list(&state.pool, &query).await?;
    let content_range = query.content_range(BidRepo::POLICY.resource, total);
    Ok(([(header::CONTENT_RANGE, content_range)], Json(rows)))
}

/// GET /api/bids/{id}
pub async fn get_bid(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bid = BidRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// POST /api/bids
///
/// Everything but the comment is required.
pub async fn create_bid(
    State(state): State<AppState>,
    Json(input): Json<CreateBid>,
) -> AppResult<impl IntoResponse> {
    let required = [
        ("name", &input.name),
        ("phone", &input.phone),
        ("email", &input.email),
        ("form", &input.form),
        ("inn", &input.inn),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{field} is required")).into());
        }
    }
    let bid = BidRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bid)))
}

/// PUT /api/bids/{id}
pub async fn update_bid(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBid>,
) -> AppResult<impl IntoResponse> {
    let bid = BidRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// DELETE /api/bids/{id}
pub async fn delete_bid(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = BidRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound { entity: "Bid", id }.into());
    }
    Ok(Json(json!({ "message": "Bid deleted successfully!" })))
}
