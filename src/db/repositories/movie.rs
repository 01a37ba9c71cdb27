use sea_orm::{DatabaseConnection, EntityTrait, JsonValue};

use super::fetch_page;
use crate::db::QueryError;
use crate::entities::{movies, prelude::*};
use crate::models::query::{FilterSpec, Page};

/// Read-only store over the movies table.
pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Single-row lookup on the primary key. A missing row is `None`.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<movies::Model>, QueryError> {
        Ok(Movies::find_by_id(id).one(&self.conn).await?)
    }

    /// One page of movies matching `filter`, plus the unsliced total.
    pub async fn find_all(
        &self,
        filter: &FilterSpec,
        page: i64,
        limit: i64,
    ) -> Result<Page<JsonValue>, QueryError> {
        fetch_page(&self.conn, "movies", filter, page, limit).await
    }
}
