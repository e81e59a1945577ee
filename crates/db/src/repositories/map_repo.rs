//! Repository for the `maps` table.

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::map::{CreateRegionMap, RegionMap, UpdateRegionMap};

const TABLE: &str = "maps";
const COLUMNS: &str = "id, title, ip, ul, smsp, created_at, updated_at";

/// CRUD plus windowed listing for region maps.
pub struct MapRepo;

impl MapRepo {
    /// Map clients render every region at once, so a rangeless request
    /// serves the whole table rather than the first page.
    pub const POLICY: ResourcePolicy = ResourcePolicy::serving_all(
        "maps",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::integer("ip", "ip"),
            FieldDef::integer("ul", "ul"),
            FieldDef::integer("smsp", "smsp"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<RegionMap>)> {
        listing::fetch_page(pool, TABLE, COLUMNS, query).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<RegionMap>> {
        let sql = format!("SELECT {COLUMNS} FROM maps WHERE id = $1");
        sqlx::query_as::<_, RegionMap>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateRegionMap) -> sqlx::Result<RegionMap> {
        let sql = format!(
            "INSERT INTO maps (title, ip, ul, smsp) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionMap>(&sql)
            .bind(&input.title)
            .bind(input.ip)
            .bind(input.ul)
            .bind(input.smsp)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegionMap,
    ) -> sqlx::Result<Option<RegionMap>> {
        let sql = format!(
            "UPDATE maps SET \
                title = COALESCE($2, title), \
                ip = COALESCE($3, ip), \
                ul = COALESCE($4, ul), \
                smsp = COALESCE($5, smsp), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionMap>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(input.ip)
            .bind(input.ul)
            .bind(input.smsp)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM maps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
