//! Route definitions for the `/news` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_news
/// POST   /        -> create_news
/// GET    /{id}    -> get_news
/// PUT    /{id}    -> update_news
/// DELETE /{id}    -> delete_news
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news))
        .route(
            "/{id}",
            get(news::get_news).put(news::update_news).delete(news::delete_news),
        )
}
