//! Route definitions for the `/bids` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bids;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_bids
/// POST   /        -> create_bid
/// GET    /{id}    -> get_bid
/// PUT    /{id}    -> update_bid
/// DELETE /{id}    -> delete_bid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bids::list_bids).post(bids::create_bid))
        .route(
            "/{id}",
            get(bids::get_bid).put(bids::update_bid).delete(bids::delete_bid),
        )
}
