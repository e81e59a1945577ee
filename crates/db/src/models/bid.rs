//! Bid (inbound request) models and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bids` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub form: String,
    pub inn: String,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a bid. Everything but the comment is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBid {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub form: String,
    pub inn: String,
    pub comment: Option<String>,
}

/// DTO for updating a bid. All fields optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBid {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub form: Option<String>,
    pub inn: Option<String>,
    pub comment: Option<String>,
}
