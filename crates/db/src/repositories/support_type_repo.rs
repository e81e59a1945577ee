//! Repository for the `support_types` table.

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::support::{
    CreateTitled, Support, SupportType, SupportTypeDetail, UpdateTitled,
};

const TABLE: &str = "support_types";
const COLUMNS: &str = "id, title, created_at, updated_at";
const SUPPORT_COLUMNS: &str = "id, title, description, img, type_id, created_at, updated_at";

/// CRUD plus windowed listing for support types.
pub struct SupportTypeRepo;

impl SupportTypeRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "typeSupports",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<SupportType>)> {
        listing::fetch_page(pool, TABLE, COLUMNS, query).await
    }

    /// Fetch one type with the support measures that carry it.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<SupportTypeDetail>> {
        let sql = format!("SELECT {COLUMNS} FROM support_types WHERE id = $1");
        let Some(support_type) = sqlx::query_as::<_, SupportType>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let sql = format!(
            "SELECT {SUPPORT_COLUMNS} FROM supports WHERE type_id = $1 ORDER BY title"
        );
        let supports: Vec<Support> = sqlx::query_as(&sql).bind(id).fetch_all(pool).await?;

        Ok(Some(SupportTypeDetail { support_type, supports }))
    }

    pub async fn create(pool: &PgPool, input: &CreateTitled) -> sqlx::Result<SupportType> {
        let sql = format!("INSERT INTO support_types (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, SupportType>(&sql)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTitled,
    ) -> sqlx::Result<Option<SupportType>> {
        let sql = format!(
            "UPDATE support_types SET title = COALESCE($2, title), updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupportType>(&sql)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a support type. Measures keep existing with no type via
    /// `ON DELETE SET NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM support_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
