//! Route definitions for the `/centers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::centers;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_centers
/// POST   /        -> create_center
/// GET    /{id}    -> get_center
/// PUT    /{id}    -> update_center
/// DELETE /{id}    -> delete_center
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(centers::list_centers).post(centers::create_center))
        .route(
            "/{id}",
            get(centers::get_center)
                .put(centers::update_center)
                .delete(centers::delete_center),
        )
}
