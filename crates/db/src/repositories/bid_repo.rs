//! Repository for the `bids` table.

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::listing;
use crate::models::bid::{Bid, CreateBid, UpdateBid};

const TABLE: &str = "bids";
const COLUMNS: &str = "id, name, phone, email, form, inn, comment, created_at, updated_at";

/// CRUD plus windowed listing for inbound bids.
pub struct BidRepo;

impl BidRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "bids",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("name", "name"),
            FieldDef::text("phone", "phone"),
            FieldDef::text("email", "email"),
            FieldDef::text("form", "form"),
            FieldDef::text("inn", "inn"),
            FieldDef::text("comment", "comment"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    pub async fn list(pool: &PgPool, query: &ListQuery) -> sqlx::Result<(i64, Vec<Bid>)> {
        listing::fetch_page(pool, TABLE, COLUMNS, query).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<Bid>> {
        let sql = format!("SELECT {COLUMNS} FROM bids WHERE id = $1");
        sqlx::query_as::<_, Bid>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateBid) -> sqlx::Result<Bid> {
        let sql = format!(
            "INSERT INTO bids (name, phone, email, form, inn, comment) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&sql)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.form)
            .bind(&input.inn)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateBid) -> sqlx::Result<Option<Bid>> {
        let sql = format!(
            "UPDATE bids SET \
                name = COALESCE($2, name), \
                phone = COALESCE($3, phone), \
                email = COALESCE($4, email), \
                form = COALESCE($5, form), \
                inn = COALESCE($6, inn), \
                comment = COALESCE($7, comment), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.form)
            .bind(&input.inn)
            .bind(&input.comment)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM bids WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
