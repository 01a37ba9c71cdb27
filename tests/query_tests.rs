//! Store- and service-level tests against seeded in-memory SQLite.

use cinedex::db::{self, MovieRepository, RatingsRepository};
use cinedex::models::query::FilterSpec;
use cinedex::services::{MovieKey, MovieQueryService};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde_json::Value as JsonValue;

// Single-connection pool so every statement sees the same in-memory db.
async fn open_db(ddl: &str) -> DatabaseConnection {
    let conn = db::connect_with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to open in-memory db");
    conn.execute_unprepared(ddl)
        .await
        .expect("failed to create schema");
    conn
}

async fn movies_db() -> DatabaseConnection {
    let conn = open_db(
        "CREATE TABLE movies (
            movie_id INTEGER PRIMARY KEY,
            imdb_id TEXT NOT NULL,
            title TEXT NOT NULL,
            overview TEXT,
            production_companies TEXT,
            release_date TEXT,
            budget INTEGER,
            revenue INTEGER,
            runtime INTEGER,
            language TEXT,
            genres TEXT,
            status TEXT
        )",
    )
    .await;

    conn.execute_unprepared(
        r#"INSERT INTO movies VALUES
            (1, 'tt0000001', 'Whispers of Winter', 'A frozen outpost goes quiet.',
             '[{"name": "Aurora Films"}]', '2023-01-01', 15000000, 42000000, 112, 'en',
             '[{"name": "Action"}, {"name": "Science Fiction"}]', 'Released'),
            (2, 'tt0000002', 'Glass Harbor', 'Two rivals inherit one shipyard.',
             '[{"name": "Tidewater Pictures"}]', '2023-02-01', 8000000, 12500000, 97, 'en',
             '[{"name": "Comedy"}]', 'Released'),
            (3, 'tt0000003', 'The Quiet Field', NULL,
             NULL, '2022-12-01', NULL, NULL, 124, 'sv',
             'Drama', 'Released')"#,
    )
    .await
    .expect("failed to seed movies");

    conn
}

async fn ratings_db() -> DatabaseConnection {
    let conn = open_db(
        "CREATE TABLE ratings (
            rating_id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            movie_id INTEGER NOT NULL,
            rating INTEGER NOT NULL,
            timestamp INTEGER NOT NULL
        )",
    )
    .await;

    conn.execute_unprepared(
        "INSERT INTO ratings VALUES
            (1, 101, 1, 5, 1700000001),
            (2, 102, 1, 4, 1700000002),
            (3, 103, 2, 3, 1700000003),
            (4, 104, 2, 5, 1700000004),
            (5, 105, 3, 2, 1700000005)",
    )
    .await
    .expect("failed to seed ratings");

    conn
}

async fn service() -> MovieQueryService {
    MovieQueryService::new(
        MovieRepository::new(movies_db().await),
        RatingsRepository::new(ratings_db().await),
    )
}

fn movie_ids(data: &[JsonValue]) -> Vec<i64> {
    data.iter()
        .map(|row| row.get("movie_id").and_then(JsonValue::as_i64).unwrap())
        .collect()
}

#[tokio::test]
async fn find_by_id_returns_row_or_none() {
    let repo = MovieRepository::new(movies_db().await);

    let movie = repo.find_by_id(1).await.unwrap().expect("movie 1 exists");
    assert_eq!(movie.title, "Whispers of Winter");
    assert_eq!(movie.release_date.as_deref(), Some("2023-01-01"));

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_windows_pages_against_a_stable_total() {
    let repo = MovieRepository::new(movies_db().await);
    let filter = FilterSpec::default();

    let first = repo.find_all(&filter, 1, 2).await.unwrap();
    assert_eq!(first.total, 3);
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.page, 1);
    assert_eq!(first.limit, 2);

    let second = repo.find_all(&filter, 2, 2).await.unwrap();
    assert_eq!(second.total, 3);
    assert_eq!(second.data.len(), 1);

    let past_the_end = repo.find_all(&filter, 3, 2).await.unwrap();
    assert_eq!(past_the_end.total, 3);
    assert!(past_the_end.data.is_empty());
}

#[tokio::test]
async fn find_all_limit_zero_returns_no_rows_but_full_total() {
    let repo = MovieRepository::new(movies_db().await);

    let page = repo.find_all(&FilterSpec::default(), 1, 0).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn find_all_passes_negative_offsets_to_the_engine() {
    let repo = MovieRepository::new(movies_db().await);

    // page 0 computes offset -2; SQLite evaluates a negative OFFSET as 0.
    let page = repo.find_all(&FilterSpec::default(), 0, 2).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 0);
}

#[tokio::test]
async fn find_all_null_filter_values_do_not_filter() {
    let repo = MovieRepository::new(movies_db().await);

    let filter = FilterSpec::default()
        .eq("status", JsonValue::Null)
        .like("title", "");
    let page = repo.find_all(&filter, 1, 50).await.unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.data.len(), 3);
}

#[tokio::test]
async fn find_all_equality_filter_narrows_rows() {
    let repo = MovieRepository::new(movies_db().await);

    let filter = FilterSpec::default().eq("language", "sv");
    let page = repo.find_all(&filter, 1, 50).await.unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(movie_ids(&page.data), vec![3]);
}

#[tokio::test]
async fn find_all_projection_returns_exactly_the_selected_columns() {
    let repo = MovieRepository::new(movies_db().await);

    let filter =
        FilterSpec::default().select(&["movie_id".to_string(), "title".to_string()]);
    let page = repo.find_all(&filter, 1, 50).await.unwrap();

    for row in &page.data {
        let object = row.as_object().expect("row is an object");
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("movie_id"));
        assert!(object.contains_key("title"));
    }
}

#[tokio::test]
async fn find_all_unknown_projection_column_is_a_query_error() {
    let repo = MovieRepository::new(movies_db().await);

    let filter = FilterSpec::default().select(&["no_such_column".to_string()]);
    assert!(repo.find_all(&filter, 1, 50).await.is_err());
}

#[tokio::test]
async fn average_for_movie_distinguishes_empty_from_zero() {
    let repo = RatingsRepository::new(ratings_db().await);

    let avg = repo.average_for_movie(1).await.unwrap();
    assert_eq!(avg, Some(4.5));

    let none = repo.average_for_movie(999).await.unwrap();
    assert_eq!(none, None);
}

#[tokio::test]
async fn ratings_find_by_id_and_find_all() {
    let repo = RatingsRepository::new(ratings_db().await);

    let rating = repo.find_by_id(5).await.unwrap().expect("rating 5 exists");
    assert_eq!(rating.movie_id, 3);
    assert_eq!(rating.rating, 2);

    let filter = FilterSpec::default().eq("movie_id", 2);
    let page = repo.find_all(&filter, 1, 50).await.unwrap();
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn service_list_paginates_the_whole_catalog() {
    let service = service().await;

    let page = service.list(1, 50, &[]).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.limit, 50);
}

#[tokio::test]
async fn service_get_by_year_uses_a_prefix_pattern_and_sorts() {
    let service = service().await;

    let page = service.get_by_year(2023, 1, None, 50, &[]).await.unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(movie_ids(&page.data), vec![1, 2]);

    let descending = service
        .get_by_year(2023, 1, Some("desc"), 50, &[])
        .await
        .unwrap();
    assert_eq!(movie_ids(&descending.data), vec![2, 1]);

    let empty_year = service.get_by_year(1999, 1, None, 50, &[]).await.unwrap();
    assert_eq!(empty_year.total, 0);
    assert!(empty_year.data.is_empty());
}

#[tokio::test]
async fn service_get_by_genre_matches_substrings() {
    let service = service().await;

    let page = service.get_by_genre("Drama", 1, 50, &[]).await.unwrap();
    assert_eq!(movie_ids(&page.data), vec![3]);
}

#[tokio::test]
async fn service_empty_genre_matches_every_row() {
    let service = service().await;

    let page = service.get_by_genre("", 1, 50, &[]).await.unwrap();
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn service_details_by_id_enriches_with_average_rating() {
    let service = service().await;

    let movie = service
        .get_details(&MovieKey::Id(1), &[])
        .await
        .unwrap()
        .expect("movie 1 exists");

    assert_eq!(movie["title"], "Whispers of Winter");
    assert_eq!(movie["avg_rating"], 4.5);
}

#[tokio::test]
async fn service_details_by_exact_title() {
    let service = service().await;

    let movie = service
        .get_details(&MovieKey::Title("Glass Harbor".to_string()), &[])
        .await
        .unwrap()
        .expect("exact title matches");
    assert_eq!(movie["movie_id"], 2);

    // Substrings do not resolve; title matching is exact.
    let partial = service
        .get_details(&MovieKey::Title("Glass".to_string()), &[])
        .await
        .unwrap();
    assert!(partial.is_none());
}

#[tokio::test]
async fn service_details_absent_key_is_none() {
    let service = service().await;

    let missing = service.get_details(&MovieKey::Id(999), &[]).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn service_details_without_ratings_carries_null_average() {
    let movies = movies_db().await;
    // A ratings store with no rows at all.
    let ratings = open_db(
        "CREATE TABLE ratings (
            rating_id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            movie_id INTEGER NOT NULL,
            rating INTEGER NOT NULL,
            timestamp INTEGER NOT NULL
        )",
    )
    .await;
    let service = MovieQueryService::new(
        MovieRepository::new(movies),
        RatingsRepository::new(ratings),
    );

    let movie = service
        .get_details(&MovieKey::Id(1), &[])
        .await
        .unwrap()
        .expect("movie 1 exists");

    assert_eq!(movie["avg_rating"], JsonValue::Null);
}

#[tokio::test]
async fn service_details_projection_without_movie_id_drops_the_average() {
    let service = service().await;

    let movie = service
        .get_details(&MovieKey::Id(1), &["title".to_string()])
        .await
        .unwrap()
        .expect("movie 1 exists");

    assert_eq!(movie["title"], "Whispers of Winter");
    assert_eq!(movie["avg_rating"], JsonValue::Null);
}
