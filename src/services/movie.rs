//! Read operations over the movie catalog.
//!
//! Composes the two entity stores into the four supported queries, applying
//! per-operation defaults and filter shapes. Stores are injected at
//! construction so tests can point the service at their own connections.

use sea_orm::JsonValue;

use crate::constants::pagination::DEFAULT_SORT;
use crate::db::{MovieRepository, QueryError, RatingsRepository};
use crate::models::query::{FilterSpec, Page};

/// How a details lookup key is interpreted: an all-numeric key is a movie
/// id, anything else matches the title exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieKey {
    Id(i64),
    Title(String),
}

impl From<&str> for MovieKey {
    fn from(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Title(raw.to_string()), Self::Id)
    }
}

pub struct MovieQueryService {
    movies: MovieRepository,
    ratings: RatingsRepository,
}

impl MovieQueryService {
    #[must_use]
    pub const fn new(movies: MovieRepository, ratings: RatingsRepository) -> Self {
        Self { movies, ratings }
    }

    /// Straight pagination over the whole catalog: no filter, no sort.
    pub async fn list(
        &self,
        page: i64,
        limit: i64,
        select: &[String],
    ) -> Result<Page<JsonValue>, QueryError> {
        let filter = FilterSpec::default().select(select);
        self.movies.find_all(&filter, page, limit).await
    }

    /// Single movie by id or exact title, enriched with its average rating
    /// under `avg_rating`. A movie with no ratings carries an explicit
    /// null there, never a zero.
    pub async fn get_details(
        &self,
        key: &MovieKey,
        select: &[String],
    ) -> Result<Option<JsonValue>, QueryError> {
        let filter = match key {
            MovieKey::Id(id) => FilterSpec::default().eq("movie_id", *id),
            MovieKey::Title(title) => FilterSpec::default().eq("title", title.as_str()),
        }
        .select(select);

        let result = self.movies.find_all(&filter, 1, 1).await?;
        let Some(mut movie) = result.data.into_iter().next() else {
            return Ok(None);
        };

        // The aggregate is keyed off the fetched row, so a projection that
        // drops movie_id also drops the average (left as null).
        let avg = match movie.get("movie_id").and_then(JsonValue::as_i64) {
            Some(movie_id) => self.ratings.average_for_movie(movie_id).await?,
            None => None,
        };

        if let Some(object) = movie.as_object_mut() {
            object.insert(
                "avg_rating".to_string(),
                avg.map_or(JsonValue::Null, Into::into),
            );
        }

        Ok(Some(movie))
    }

    /// Movies released in `year`, sorted by release date (ascending unless
    /// told otherwise). Release dates are "YYYY-MM-DD" strings, so the year
    /// filters as a prefix pattern; a bare-year equality match would never
    /// hit a real date.
    pub async fn get_by_year(
        &self,
        year: i32,
        page: i64,
        sort: Option<&str>,
        limit: i64,
        select: &[String],
    ) -> Result<Page<JsonValue>, QueryError> {
        let filter = FilterSpec::default()
            .like("release_date", format!("{year}-%"))
            .order_by("release_date", sort.unwrap_or(DEFAULT_SORT))
            .select(select);

        self.movies.find_all(&filter, page, limit).await
    }

    /// Movies whose genres column contains `genre` as a substring. An empty
    /// genre compiles to the pattern `%%`, which matches every row with a
    /// non-NULL genres column.
    pub async fn get_by_genre(
        &self,
        genre: &str,
        page: i64,
        limit: i64,
        select: &[String],
    ) -> Result<Page<JsonValue>, QueryError> {
        let filter = FilterSpec::default()
            .like("genres", format!("%{genre}%"))
            .select(select);

        self.movies.find_all(&filter, page, limit).await
    }
}
