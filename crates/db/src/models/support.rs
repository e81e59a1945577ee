//! Support-measure models and DTOs: the measures themselves plus their
//! type and tag catalogues.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `support_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportType {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `support_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTag {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `supports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Support {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub img: Vec<String>,
    pub type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Support measure enriched with its type and tags.
#[derive(Debug, Clone, Serialize)]
pub struct SupportDetail {
    #[serde(flatten)]
    pub support: Support,
    #[serde(rename = "type")]
    pub support_type: Option<SupportType>,
    pub tags: Vec<SupportTag>,
}

/// Support type enriched with the measures that carry it.
#[derive(Debug, Clone, Serialize)]
pub struct SupportTypeDetail {
    #[serde(flatten)]
    pub support_type: SupportType,
    pub supports: Vec<Support>,
}

/// Support tag enriched with the measures that carry it.
#[derive(Debug, Clone, Serialize)]
pub struct SupportTagDetail {
    #[serde(flatten)]
    pub tag: SupportTag,
    pub supports: Vec<Support>,
}

/// DTO for creating a support measure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupport {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub img: Vec<String>,
    pub type_id: Option<DbId>,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

/// DTO for updating a support measure. A present `tag_ids` list replaces
/// the tag links wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupport {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img: Option<Vec<String>>,
    pub type_id: Option<DbId>,
    pub tag_ids: Option<Vec<DbId>>,
}

/// DTO for creating a support type or tag (both are bare titles).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTitled {
    pub title: String,
}

/// DTO for updating a support type or tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTitled {
    pub title: Option<String>,
}
