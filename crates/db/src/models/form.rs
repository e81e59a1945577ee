//! Request-form models and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::service::Service;

/// A row from the `forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Form enriched with the services that point at it.
#[derive(Debug, Clone, Serialize)]
pub struct FormDetail {
    #[serde(flatten)]
    pub form: Form,
    pub services: Vec<Service>,
}

/// DTO for creating a form. `services` optionally attaches existing
/// services to the new form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForm {
    pub title: String,
    pub services: Option<Vec<DbId>>,
}

/// DTO for updating a form. A present `services` list replaces the
/// attached set wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForm {
    pub title: Option<String>,
    pub services: Option<Vec<DbId>>,
}
