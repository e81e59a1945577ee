//! Route definitions for the `/services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_services
/// POST   /        -> create_service
/// GET    /{id}    -> get_service
/// PUT    /{id}    -> update_service
/// DELETE /{id}    -> delete_service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_services).post(services::create_service))
        .route(
            "/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
}
