//! Route definitions for the `/typeSupports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::support_types;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_support_types
/// POST   /        -> create_support_type
/// GET    /{id}    -> get_support_type
/// PUT    /{id}    -> update_support_type
/// DELETE /{id}    -> delete_support_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(support_types::list_support_types).post(support_types::create_support_type),
        )
        .route(
            "/{id}",
            get(support_types::get_support_type)
                .put(support_types::update_support_type)
                .delete(support_types::delete_support_type),
        )
}
