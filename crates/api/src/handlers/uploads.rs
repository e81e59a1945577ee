//! Multipart image upload endpoint.
//!
//! Accepts one or more image files, stores them under the configured
//! upload directory with a timestamped name and responds with the public
//! paths. Files are stored as received; no transcoding happens here.

use std::path::Path as FsPath;

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use portal_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// File extensions the endpoint accepts.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Response payload: public paths of the stored files.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_paths: Vec<String>,
}

/// POST /uploads
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::Internal(format!("creating upload dir: {e}")))?;

    let mut file_paths = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CoreError::Validation(format!("invalid multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let extension = FsPath::new(&file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(
                CoreError::Validation(format!("unsupported file type: {file_name:?}")).into(),
            );
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| CoreError::Validation(format!("reading upload: {e}")))?;

        // Uploaded names may contain path separators; never trust them.
        let safe_name = file_name.replace(['/', '\\'], "_");
        let stored_name = format!("{}-{safe_name}", Utc::now().timestamp_millis());
        tokio::fs::write(upload_dir.join(&stored_name), &data)
            .await
            .map_err(|e| AppError::Internal(format!("storing upload: {e}")))?;

        file_paths.push(format!("/uploads/{stored_name}"));
    }

    if file_paths.is_empty() {
        return Err(CoreError::Validation("no files uploaded".to_string()).into());
    }

    Ok(Json(UploadResponse { file_paths }))
}
