//! Route definitions for the `/maps` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::maps;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_maps
/// POST   /        -> create_map
/// GET    /{id}    -> get_map
/// PUT    /{id}    -> update_map
/// DELETE /{id}    -> delete_map
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(maps::list_maps).post(maps::create_map))
        .route(
            "/{id}",
            get(maps::get_map).put(maps::update_map).delete(maps::delete_map),
        )
}
