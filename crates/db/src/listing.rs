//! SQL rendering for the shared list-query contract.
//!
//! Repositories hand over their table and column constants plus the
//! resolved [`ListQuery`]; this module renders the WHERE clause once and
//! runs the two store operations of a list request — the count and the
//! windowed fetch — against that same predicate. The two statements are
//! not a snapshot: totals and rows may drift under concurrent writes,
//! which is accepted for this class of system.
//!
//! Identifiers pushed into the SQL text (table, columns, sort column)
//! come from compile-time constants and the validated field tables in
//! `portal_core::listing`, never from raw client strings; client values
//! are always bound.

use portal_core::listing::{FilterOp, ListQuery};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

/// Escape LIKE wildcards in a containment needle and wrap it in `%`.
fn like_needle(raw: &str) -> String {
    let mut needle = String::with_capacity(raw.len() + 2);
    needle.push('%');
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            needle.push('\\');
        }
        needle.push(ch);
    }
    needle.push('%');
    needle
}

/// Append the query's filter clauses as a `WHERE` predicate.
fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, query: &ListQuery) {
    for (i, clause) in query.filters.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        builder.push(clause.column);
        match &clause.op {
            FilterOp::InText(values) => {
                builder.push(" = ANY(").push_bind(values.clone()).push(")");
            }
            FilterOp::InInt(values) => {
                builder.push(" = ANY(").push_bind(values.clone()).push(")");
            }
            FilterOp::Contains(needle) => {
                builder.push(" ILIKE ").push_bind(like_needle(needle));
            }
            FilterOp::EqText(value) => {
                builder.push(" = ").push_bind(value.clone());
            }
            FilterOp::EqInt(value) => {
                builder.push(" = ").push_bind(*value);
            }
            FilterOp::EqFloat(value) => {
                builder.push(" = ").push_bind(*value);
            }
            FilterOp::EqBool(value) => {
                builder.push(" = ").push_bind(*value);
            }
            FilterOp::IsNull => {
                builder.push(" IS NULL");
            }
        }
    }
}

/// Count the rows matching the query's predicate.
pub async fn count_rows(pool: &PgPool, table: &str, query: &ListQuery) -> sqlx::Result<i64> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {table}"));
    push_predicate(&mut builder, query);
    let row = builder.build().fetch_one(pool).await?;
    row.try_get(0)
}

/// Fetch the query's result window, sorted per the query.
pub async fn fetch_rows<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    query: &ListQuery,
) -> sqlx::Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut builder = QueryBuilder::new(format!("SELECT {columns} FROM {table}"));
    push_predicate(&mut builder, query);
    builder.push(format!(
        " ORDER BY {} {}",
        query.sort_column,
        query.sort_order.as_sql()
    ));
    builder.push(" LIMIT ").push_bind(query.take());
    builder.push(" OFFSET ").push_bind(query.skip());
    builder.build_query_as::<T>().fetch_all(pool).await
}

/// Run both halves of a list request with the same predicate.
pub async fn fetch_page<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    query: &ListQuery,
) -> sqlx::Result<(i64, Vec<T>)>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let total = count_rows(pool, table, query).await?;
    let rows = fetch_rows(pool, table, columns, query).await?;
    tracing::debug!(
        table,
        total,
        returned = rows.len(),
        skip = query.skip(),
        take = query.take(),
        "Fetched list window"
    );
    Ok((total, rows))
}
