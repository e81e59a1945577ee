//! Route definitions for the `/forms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_forms
/// POST   /        -> create_form
/// GET    /{id}    -> get_form
/// PUT    /{id}    -> update_form
/// DELETE /{id}    -> delete_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list_forms).post(forms::create_form))
        .route(
            "/{id}",
            get(forms::get_form).put(forms::update_form).delete(forms::delete_form),
        )
}
