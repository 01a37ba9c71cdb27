pub mod movie;
pub mod ratings;

use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, JsonValue, Statement};

use super::QueryError;
use super::clause::{build_order_clause, build_where_clause};
use crate::models::query::{FilterSpec, Page};

#[derive(FromQueryResult)]
struct CountRow {
    total: i64,
}

/// Shared count + select engine behind every `find_all`.
///
/// Issues two queries over the same predicate and parameter set: a
/// `COUNT(*)` for the unsliced total, then the projected data query with
/// `LIMIT ? OFFSET ?`. The offset is `(page - 1) * limit`, unclamped: a
/// page of zero or less reaches SQLite as a negative offset, which the
/// engine evaluates as zero. A limit of zero returns no rows while the
/// total still covers the whole filtered set.
///
/// Rows come back as JSON objects holding exactly the selected columns, so
/// a projection cannot leak unselected fields. A projection naming an
/// unknown column fails the data query with [`QueryError`].
pub(crate) async fn fetch_page(
    conn: &DatabaseConnection,
    table: &str,
    filter: &FilterSpec,
    page: i64,
    limit: i64,
) -> Result<Page<JsonValue>, QueryError> {
    let backend = conn.get_database_backend();
    let offset = (page - 1) * limit;

    let built = build_where_clause(&filter.eq, &filter.like);
    let order = build_order_clause(&filter.order);

    let count_sql = format!("SELECT COUNT(*) AS total FROM {table} {}", built.clause);
    let total = CountRow::find_by_statement(Statement::from_sql_and_values(
        backend,
        count_sql,
        built.params.clone(),
    ))
    .one(conn)
    .await?
    .map_or(0, |row| row.total);

    let columns = if filter.select.is_empty() {
        "*".to_string()
    } else {
        filter.select.join(", ")
    };
    let data_sql = format!(
        "SELECT {columns} FROM {table} {} {} LIMIT ? OFFSET ?",
        built.clause, order
    );

    let mut params = built.params;
    params.push(limit.into());
    params.push(offset.into());

    let data = JsonValue::find_by_statement(Statement::from_sql_and_values(
        backend, data_sql, params,
    ))
    .all(conn)
    .await?;

    Ok(Page {
        data,
        total,
        page,
        limit,
    })
}
