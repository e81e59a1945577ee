pub mod bids;
pub mod centers;
pub mod forms;
pub mod health;
pub mod maps;
pub mod news;
pub mod services;
pub mod support_tags;
pub mod support_types;
pub mod supports;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /news                    list, create
/// /news/{id}               get, update, delete
/// /services                list, create (embeds centers + form)
/// /services/{id}           get, update, delete
/// /centers                 list, create
/// /centers/{id}            get, update, delete
/// /forms                   list, create (embeds services)
/// /forms/{id}              get, update, delete
/// /supports                list, create (embeds type + tags)
/// /supports/{id}           get, update, delete
/// /typeSupports            list, create
/// /typeSupports/{id}       get (embeds supports), update, delete
/// /tagsSupports            list, create
/// /tagsSupports/{id}       get (embeds supports), update, delete
/// /bids                    list, create
/// /bids/{id}               get, update, delete
/// /maps                    list (all rows by default), create
/// /maps/{id}               get, update, delete
/// ```
///
/// Path segments keep the names existing admin clients were built
/// against, camelCase included.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/news", news::router())
        .nest("/services", services::router())
        .nest("/centers", centers::router())
        .nest("/forms", forms::router())
        .nest("/supports", supports::router())
        .nest("/typeSupports", support_types::router())
        .nest("/tagsSupports", support_tags::router())
        .nest("/bids", bids::router())
        .nest("/maps", maps::router())
}
