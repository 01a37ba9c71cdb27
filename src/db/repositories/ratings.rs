use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, JsonValue, Statement,
};

use super::fetch_page;
use crate::db::QueryError;
use crate::entities::{prelude::*, ratings};
use crate::models::query::{FilterSpec, Page};

/// Read-only store over the ratings table.
pub struct RatingsRepository {
    conn: DatabaseConnection,
}

#[derive(FromQueryResult)]
struct AvgRow {
    avg_rating: Option<f64>,
}

impl RatingsRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ratings::Model>, QueryError> {
        Ok(Ratings::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn find_all(
        &self,
        filter: &FilterSpec,
        page: i64,
        limit: i64,
    ) -> Result<Page<JsonValue>, QueryError> {
        fetch_page(&self.conn, "ratings", filter, page, limit).await
    }

    /// Mean rating for one movie. `AVG` over zero rows is SQL NULL, carried
    /// through as `None` so an empty set stays distinct from a zero average.
    pub async fn average_for_movie(&self, movie_id: i64) -> Result<Option<f64>, QueryError> {
        let backend = self.conn.get_database_backend();
        let row = AvgRow::find_by_statement(Statement::from_sql_and_values(
            backend,
            "SELECT AVG(rating) AS avg_rating FROM ratings WHERE movie_id = ?",
            [movie_id.into()],
        ))
        .one(&self.conn)
        .await?;

        Ok(row.and_then(|r| r.avg_rating))
    }
}
