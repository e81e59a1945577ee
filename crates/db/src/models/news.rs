//! News models and DTOs.
//!
//! News rows come from two producers: the admin UI and the Telegram
//! mirror. `date` is the editorial publication date and is distinct from
//! the row timestamps.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub img: Vec<String>,
    pub date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news item. `img` holds upload paths returned by the
/// upload endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNews {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub img: Vec<String>,
    pub date: Option<Timestamp>,
}

/// DTO for updating a news item. All fields optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNews {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img: Option<Vec<String>>,
    pub date: Option<Timestamp>,
}
