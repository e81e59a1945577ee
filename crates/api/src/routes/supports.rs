//! Route definitions for the `/supports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::supports;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_supports
/// POST   /        -> create_support
/// GET    /{id}    -> get_support
/// PUT    /{id}    -> update_support
/// DELETE /{id}    -> delete_support
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(supports::list_supports).post(supports::create_support))
        .route(
            "/{id}",
            get(supports::get_support)
                .put(supports::update_support)
                .delete(supports::delete_support),
        )
}
