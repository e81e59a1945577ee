//! Upload endpoint plus the static file service over stored uploads.

use std::path::Path;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::uploads;
use crate::state::AppState;

/// Maximum multipart body size.
const MAX_UPLOAD_BYTES: usize = 48 * 1024 * 1024;

/// ```text
/// POST   /          -> upload_images (multipart)
/// GET    /{file}    -> stored file, served from the upload directory
/// ```
pub fn router(upload_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload_images))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .fallback_service(ServeDir::new(upload_dir))
}
