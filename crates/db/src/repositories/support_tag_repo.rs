//! Repository for the `support_tags` table.

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::support::{
    CreateTitled, Support, SupportTag, SupportTagDetail, UpdateTitled,
};

const TABLE: &str = "support_tags";
const COLUMNS: &str = "id, title, created_at, updated_at";

/// CRUD plus windowed listing for support tags.
pub struct SupportTagRepo;

impl SupportTagRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "tagsSupports",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<SupportTag>)> {
        listing::fetch_page(pool, TABLE, COLUMNS, query).await
    }

    /// Fetch one tag with the support measures that carry it.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<SupportTagDetail>> {
        let sql = format!("SELECT {COLUMNS} FROM support_tags WHERE id = $1");
        let Some(tag) = sqlx::query_as::<_, SupportTag>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let supports: Vec<Support> = sqlx::query_as(
            "SELECT s.id, s.title, s.description, s.img, s.type_id, s.created_at, s.updated_at \
             FROM support_tag_links l \
             JOIN supports s ON s.id = l.support_id \
             WHERE l.tag_id = $1 \
             ORDER BY s.title",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(SupportTagDetail { tag, supports }))
    }

    pub async fn create(pool: &PgPool, input: &CreateTitled) -> sqlx::Result<SupportTag> {
        let sql = format!("INSERT INTO support_tags (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, SupportTag>(&sql)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTitled,
    ) -> sqlx::Result<Option<SupportTag>> {
        let sql = format!(
            "UPDATE support_tags SET title = COALESCE($2, title), updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupportTag>(&sql)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a support tag. Links to measures cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM support_tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
