//! Repository for the `services` table and its `service_centers` links.

use std::collections::HashMap;

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::listing;
use crate::models::center::Center;
use crate::models::form::Form;
use crate::models::service::{CreateService, Service, ServiceDetail, UpdateService};

const TABLE: &str = "services";
const COLUMNS: &str = "id, title, description, img, form_id, created_at, updated_at";
const FORM_COLUMNS: &str = "id, title, created_at, updated_at";

/// One center link keyed by the service it belongs to.
#[derive(FromRow)]
struct ServiceCenterRow {
    service_id: DbId,
    #[sqlx(flatten)]
    center: Center,
}

/// CRUD plus windowed listing for services, including center and form
/// hydration.
pub struct ServiceRepo;

impl ServiceRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "services",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::text("description", "description"),
            FieldDef::integer("formId", "form_id"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    /// Count and fetch one result window, then hydrate relations for the
    /// windowed rows only.
    pub async fn list(
        pool: &PgPool,
        query: &ListQuery,
    ) -> sqlx::Result<(i64, Vec<ServiceDetail>)> {
        let (total, rows) = listing::fetch_page::<Service>(pool, TABLE, COLUMNS, query).await?;
        let details = Self::hydrate(pool, rows).await?;
        Ok((total, details))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<ServiceDetail>> {
        let sql = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        let Some(service) = sqlx::query_as::<_, Service>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let mut details = Self::hydrate(pool, vec![service]).await?;
        Ok(details.pop())
    }

    pub async fn create(pool: &PgPool, input: &CreateService) -> sqlx::Result<ServiceDetail> {
        let mut tx = pool.begin().await?;

        let sql = format!(
            "INSERT INTO services (title, description, img, form_id) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        let service = sqlx::query_as::<_, Service>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.form_id)
            .fetch_one(&mut *tx)
            .await?;

        link_centers(&mut tx, service.id, &input.center_ids).await?;
        tx.commit().await?;

        let mut details = Self::hydrate(pool, vec![service]).await?;
        details.pop().ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a service. Only non-`None` fields are applied; a present
    /// `center_ids` list replaces the links wholesale.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> sqlx::Result<Option<ServiceDetail>> {
        let mut tx = pool.begin().await?;

        let sql = format!(
            "UPDATE services SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                img = COALESCE($4, img), \
                form_id = COALESCE($5, form_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(service) = sqlx::query_as::<_, Service>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.form_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(center_ids) = &input.center_ids {
            sqlx::query("DELETE FROM service_centers WHERE service_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_centers(&mut tx, id, center_ids).await?;
        }
        tx.commit().await?;

        let mut details = Self::hydrate(pool, vec![service]).await?;
        Ok(details.pop())
    }

    /// Delete a service. Center links go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach centers and forms to a page of services with one keyed
    /// query per relation.
    async fn hydrate(pool: &PgPool, services: Vec<Service>) -> sqlx::Result<Vec<ServiceDetail>> {
        if services.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = services.iter().map(|s| s.id).collect();
        let center_rows: Vec<ServiceCenterRow> = sqlx::query_as(
            "SELECT sc.service_id, c.id, c.title, c.created_at, c.updated_at \
             FROM service_centers sc \
             JOIN centers c ON c.id = sc.center_id \
             WHERE sc.service_id = ANY($1) \
             ORDER BY c.title",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut centers_by_service: HashMap<DbId, Vec<Center>> = HashMap::new();
        for row in center_rows {
            centers_by_service.entry(row.service_id).or_default().push(row.center);
        }

        let form_ids: Vec<DbId> = services.iter().filter_map(|s| s.form_id).collect();
        let mut forms_by_id: HashMap<DbId, Form> = HashMap::new();
        if !form_ids.is_empty() {
            let sql = format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = ANY($1)");
            let forms: Vec<Form> = sqlx::query_as(&sql).bind(&form_ids).fetch_all(pool).await?;
            forms_by_id = forms.into_iter().map(|f| (f.id, f)).collect();
        }

        Ok(services
            .into_iter()
            .map(|service| {
                let centers = centers_by_service.remove(&service.id).unwrap_or_default();
                let form = service.form_id.and_then(|id| forms_by_id.get(&id).cloned());
                ServiceDetail { service, centers, form }
            })
            .collect())
    }
}

/// Insert center links for a service.
async fn link_centers(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    service_id: DbId,
    center_ids: &[DbId],
) -> sqlx::Result<()> {
    if center_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO service_centers (service_id, center_id) \
         SELECT $1, unnest($2::bigint[])",
    )
    .bind(service_id)
    .bind(center_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
