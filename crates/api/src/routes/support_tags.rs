//! Route definitions for the `/tagsSupports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::support_tags;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_support_tags
/// POST   /        -> create_support_tag
/// GET    /{id}    -> get_support_tag
/// PUT    /{id}    -> update_support_tag
/// DELETE /{id}    -> delete_support_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(support_tags::list_support_tags).post(support_tags::create_support_tag),
        )
        .route(
            "/{id}",
            get(support_tags::get_support_tag)
                .put(support_tags::update_support_tag)
                .delete(support_tags::delete_support_tag),
        )
}
