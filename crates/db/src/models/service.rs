//! Service models and DTOs.
//!
//! Services are offered at centers (many-to-many via `service_centers`)
//! and may point at the request form a visitor fills in.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::center::Center;
use crate::models::form::Form;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub img: Vec<String>,
    pub form_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Service enriched with its centers and form, the shape list and detail
/// endpoints respond with.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,
    pub centers: Vec<Center>,
    pub form: Option<Form>,
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub img: Vec<String>,
    pub form_id: Option<DbId>,
    #[serde(default)]
    pub center_ids: Vec<DbId>,
}

/// DTO for updating a service. A present `center_ids` list replaces the
/// center links wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img: Option<Vec<String>>,
    pub form_id: Option<DbId>,
    pub center_ids: Option<Vec<DbId>>,
}
