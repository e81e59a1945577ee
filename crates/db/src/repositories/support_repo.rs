//! Repository for the `supports` table and its `support_tag_links`.

use std::collections::HashMap;

use portal_core::listing::{FieldDef, ListQuery, ResourcePolicy};
use portal_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::listing;
use crate::models::support::{
    CreateSupport, Support, SupportDetail, SupportTag, SupportType, UpdateSupport,
};

const TABLE: &str = "supports";
const COLUMNS: &str = "id, title, description, img, type_id, created_at, updated_at";
const TYPE_COLUMNS: &str = "id, title, created_at, updated_at";

/// One tag link keyed by the support it belongs to.
#[derive(FromRow)]
struct SupportTagRow {
    support_id: DbId,
    #[sqlx(flatten)]
    tag: SupportTag,
}

/// CRUD plus windowed listing for support measures, including type and
/// tag hydration.
pub struct SupportRepo;

impl SupportRepo {
    pub const POLICY: ResourcePolicy = ResourcePolicy::new(
        "supports",
        &[
            FieldDef::integer("id", "id"),
            FieldDef::text("title", "title"),
            FieldDef::text("description", "description"),
            FieldDef::integer("typeId", "type_id"),
            FieldDef::timestamp("createdAt", "created_at"),
            FieldDef::timestamp("updatedAt", "updated_at"),
        ],
    );

    pub async fn list(
        pool: &PgPool,
        query: &ListQuery,
    ) -> sqlx::Result<(i64, Vec<SupportDetail>)> {
        let (total, rows) = listing::fetch_page::<Support>(pool, TABLE, COLUMNS, query).await?;
        let details = Self::hydrate(pool, rows).await?;
        Ok((total, details))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> sqlx::Result<Option<SupportDetail>> {
        let sql = format!("SELECT {COLUMNS} FROM supports WHERE id = $1");
        let Some(support) = sqlx::query_as::<_, Support>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let mut details = Self::hydrate(pool, vec![support]).await?;
        Ok(details.pop())
    }

    pub async fn create(pool: &PgPool, input: &CreateSupport) -> sqlx::Result<SupportDetail> {
        let mut tx = pool.begin().await?;

        let sql = format!(
            "INSERT INTO supports (title, description, img, type_id) \
             VALUES ($1, COALESCE($2, ''), $3, $4) RETURNING {COLUMNS}"
        );
        let support = sqlx::query_as::<_, Support>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.type_id)
            .fetch_one(&mut *tx)
            .await?;

        link_tags(&mut tx, support.id, &input.tag_ids).await?;
        tx.commit().await?;

        let mut details = Self::hydrate(pool, vec![support]).await?;
        details.pop().ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a support measure. A present `tag_ids` list replaces the
    /// tag links wholesale.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupport,
    ) -> sqlx::Result<Option<SupportDetail>> {
        let mut tx = pool.begin().await?;

        let sql = format!(
            "UPDATE supports SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                img = COALESCE($4, img), \
                type_id = COALESCE($5, type_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(support) = sqlx::query_as::<_, Support>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.type_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(tag_ids) = &input.tag_ids {
            sqlx::query("DELETE FROM support_tag_links WHERE support_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_tags(&mut tx, id, tag_ids).await?;
        }
        tx.commit().await?;

        let mut details = Self::hydrate(pool, vec![support]).await?;
        Ok(details.pop())
    }

    /// Delete a support measure. Tag links cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM supports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn hydrate(pool: &PgPool, supports: Vec<Support>) -> sqlx::Result<Vec<SupportDetail>> {
        if supports.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = supports.iter().map(|s| s.id).collect();
        let tag_rows: Vec<SupportTagRow> = sqlx::query_as(
            "SELECT l.support_id, t.id, t.title, t.created_at, t.updated_at \
             FROM support_tag_links l \
             JOIN support_tags t ON t.id = l.tag_id \
             WHERE l.support_id = ANY($1) \
             ORDER BY t.title",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut tags_by_support: HashMap<DbId, Vec<SupportTag>> = HashMap::new();
        for row in tag_rows {
            tags_by_support.entry(row.support_id).or_default().push(row.tag);
        }

        let type_ids: Vec<DbId> = supports.iter().filter_map(|s| s.type_id).collect();
        let mut types_by_id: HashMap<DbId, SupportType> = HashMap::new();
        if !type_ids.is_empty() {
            let sql = format!("SELECT {TYPE_COLUMNS} FROM support_types WHERE id = ANY($1)");
            let types: Vec<SupportType> =
                sqlx::query_as(&sql).bind(&type_ids).fetch_all(pool).await?;
            types_by_id = types.into_iter().map(|t| (t.id, t)).collect();
        }

        Ok(supports
            .into_iter()
            .map(|support| {
                let tags = tags_by_support.remove(&support.id).unwrap_or_default();
                let support_type =
                    support.type_id.and_then(|id| types_by_id.get(&id).cloned());
                SupportDetail { support, support_type, tags }
            })
            .collect())
    }
}

/// Insert tag links for a support measure.
async fn link_tags(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    support_id: DbId,
    tag_ids: &[DbId],
) -> sqlx::Result<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO support_tag_links (support_id, tag_id) \
         SELECT $1, unnest($2::bigint[])",
    )
    .bind(support_id)
    .bind(tag_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
