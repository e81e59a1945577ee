//! Repository for the `forms` table.
//!
//! Attaching a service to a form is modelled on the service side
//! (`services.form_id`); the form endpoints expose it as a `services`
//! list.

use std::collections::HashMap;

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::form::{CreateForm, Form, FormDetail, UpdateForm};
use crate::models::service::Service;

const TABLE: &str = "forms";
const COLUMNS: &str = "id, title, created_at, updated_at";
const SERVICE_COLUMNS: &str = "id, title, description, img, form_id, created_at, updated_at";

/// CRUD plus windowed listing for request forms.
pub struct FormRepo;

impl FormRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "forms",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    /// Count and fetch one result window, with the attached services
    /// hydrated for the windowed rows.
    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<FormDetail>)> {
        let (total, rows) = listing::fetch_page::<Form>(pool, TABLE, COLUMNS, query).await?;
        let details = Self::hydrate(pool, rows).await?;
        Ok((total, details))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<FormDetail>> {
        let sql = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        let Some(form) = sqlx::query_as::<_, Form>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let mut details = Self::hydrate(pool, vec![form]).await?;
        Ok(details.pop())
    }

    pub async fn create(pool: &PgPool, input: &CreateForm) -> sqlx::Result<FormDetail> {
        let mut tx = pool.begin().await?;

        let sql = format!("INSERT INTO forms (title) VALUES ($1) RETURNING {COLUMNS}");
        let form = sqlx::query_as::<_, Form>(&sql)
            .bind(&input.title)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(service_ids) = &input.services {
            attach_services(&mut tx, form.id, service_ids).await?;
        }
        tx.commit().await?;

        let mut details = Self::hydrate(pool, vec![form]).await?;
        details.pop().ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a form. A present `services` list replaces the attachment
    /// set wholesale.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForm,
    ) -> sqlx::Result<Option<FormDetail>> {
        let mut tx = pool.begin().await?;

        let sql = format!(
            "UPDATE forms SET title = COALESCE($2, title), updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let Some(form) = sqlx::query_as::<_, Form>(&sql)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(service_ids) = &input.services {
            sqlx::query("UPDATE services SET form_id = NULL WHERE form_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            attach_services(&mut tx, id, service_ids).await?;
        }
        tx.commit().await?;

        let mut details = Self::hydrate(pool, vec![form]).await?;
        Ok(details.pop())
    }

    /// Delete a form. Services pointing at it fall back to no form via
    /// `ON DELETE SET NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn hydrate(pool: &PgPool, forms: Vec<Form>) -> sqlx::Result<Vec<FormDetail>> {
        if forms.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = forms.iter().map(|f| f.id).collect();
        let sql = format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE form_id = ANY($1) ORDER BY title"
        );
        let services: Vec<Service> = sqlx::query_as(&sql).bind(&ids).fetch_all(pool).await?;

        let mut services_by_form: HashMap<DbId, Vec<Service>> = HashMap::new();
        for service in services {
            if let Some(form_id) = service.form_id {
                services_by_form.entry(form_id).or_default().push(service);
            }
        }

        Ok(forms
            .into_iter()
            .map(|form| {
                let services = services_by_form.remove(&form.id).unwrap_or_default();
                FormDetail { form, services }
            })
            .collect())
    }
}

/// Point existing services at a form.
async fn attach_services(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    form_id: DbId,
    service_ids: &[DbId],
) -> sqlx::Result<()> {
    if service_ids.is_empty() {
        return Ok(());
    }
    sqlx::query("UPDATE services SET form_id = $1 WHERE id = ANY($2)")
        .bind(form_id)
        .bind(service_ids)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
