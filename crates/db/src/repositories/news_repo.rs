//! Repository for the `news` table.

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::news::{CreateNews, News, UpdateNews};

const TABLE: &str = "news";
const COLUMNS: &str = "id, title, description, img, date, created_at, updated_at";

/// CRUD plus windowed listing for news items.
pub struct NewsRepo;

impl NewsRepo {
    /// Listing policy: fields the admin client may sort and filter on.
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "news",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::text("description", "description"),
            FieldDef::timestamp("date", "date"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    /// Count and fetch one result window.
    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<News>)> {
        listing::fetch_page(pool, TABLE, COLUMNS, query).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<News>> {
        let sql = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, News>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateNews) -> sqlx::Result<News> {
        let sql = format!(
            "INSERT INTO news (title, description, img, date) \
             VALUES ($1, COALESCE($2, ''), $3, COALESCE($4, now())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Update a news item. Only non-`None` fields are applied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateNews) -> sqlx::Result<Option<News>> {
        let sql = format!(
            "UPDATE news SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                img = COALESCE($4, img), \
                date = COALESCE($5, date), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a news item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
