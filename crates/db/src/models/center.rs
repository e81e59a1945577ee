//! Center models and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `centers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a center.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCenter {
    pub title: String,
}

/// DTO for updating a center.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCenter {
    pub title: Option<String>,
}
