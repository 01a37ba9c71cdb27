use anyhow::Context;
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{self, MovieRepository, RatingsRepository};
use crate::services::MovieQueryService;

mod error;
mod format;
mod movies;
mod system;
mod validation;

pub use error::ApiError;

pub struct AppState {
    pub service: MovieQueryService,

    pub movies: DatabaseConnection,

    pub ratings: DatabaseConnection,
}

impl AppState {
    /// Wire the query service to its two backing stores. The connections
    /// are kept alongside the service for health checks.
    #[must_use]
    pub fn new(movies: DatabaseConnection, ratings: DatabaseConnection) -> Self {
        let service = MovieQueryService::new(
            MovieRepository::new(movies.clone()),
            RatingsRepository::new(ratings.clone()),
        );
        Self {
            service,
            movies,
            ratings,
        }
    }
}

pub async fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let movies = db::connect(&config.databases.movies_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to movies database: {}",
                config.databases.movies_url
            )
        })?;

    let ratings = db::connect(&config.databases.ratings_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to ratings database: {}",
                config.databases.ratings_url
            )
        })?;

    Ok(Arc::new(AppState::new(movies, ratings)))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/movies", get(movies::list_movies))
        .route("/api/movies/{key}", get(movies::get_movie))
        .route("/api/movies/year/{year}", get(movies::movies_by_year))
        .route("/api/movies/genre/{genre}", get(movies::movies_by_genre))
        .route("/api/system/status", get(system::status))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
