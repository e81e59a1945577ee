//! Region-map models and DTOs.
//!
//! Each row carries the business counters shown on a region of the public
//! map: individual entrepreneurs (`ip`), legal entities (`ul`) and small
//! and medium businesses (`smsp`).

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `maps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMap {
    pub id: DbId,
    pub title: String,
    pub ip: i32,
    pub ul: i32,
    pub smsp: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a region map entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionMap {
    pub title: String,
    pub ip: i32,
    pub ul: i32,
    pub smsp: i32,
}

/// DTO for updating a region map entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionMap {
    pub title: Option<String>,
    pub ip: Option<i32>,
    pub ul: Option<i32>,
    pub smsp: Option<i32>,
}
