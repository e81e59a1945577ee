//! Repository for the `centers` table.

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::center::{Center, CreateCenter, UpdateCenter};

const TABLE: &str = "centers";
const COLUMNS: &str = "id, title, created_at, updated_at";

/// CRUD plus windowed listing for centers.
pub struct CenterRepo;

impl CenterRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "centers",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<Center>)> {
        listing::fetch_page(pool, TABLE, COLUMNS, query).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<Center>> {
        let sql = format!("SELECT {COLUMNS} FROM centers WHERE id = $1");
        sqlx::query_as::<_, Center>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateCenter) -> sqlx::Result<Center> {
        let sql = format!("INSERT INTO centers (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Center>(&sql)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCenter,
    ) -> sqlx::Result<Option<Center>> {
        let sql = format!(
            "UPDATE centers SET title = COALESCE($2, title), updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Center>(&sql)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM centers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
