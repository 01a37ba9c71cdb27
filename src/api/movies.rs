use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;

use super::format::{format_dollars, format_name_list, format_rating};
use super::validation::parse_fields;
use super::{ApiError, AppState};
use crate::constants::fields;
use crate::constants::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::query::Page;
use crate::services::MovieKey;

#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub sort: Option<String>,
    pub fields: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaginationDto {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationDto {
    fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 { (total + limit - 1) / limit } else { 0 };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoviePageDto {
    pub data: Vec<JsonValue>,
    pub pagination: PaginationDto,
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<MoviePageDto>, ApiError> {
    let select = parse_fields(params.fields.as_deref(), fields::MOVIE_LIST)?;
    let page = params.page.unwrap_or(DEFAULT_PAGE);

    let result = state.service.list(page, DEFAULT_PAGE_SIZE, &select).await?;
    Ok(Json(present_page(result)))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(params): Query<ListQuery>,
) -> Result<Json<JsonValue>, ApiError> {
    let select = parse_fields(params.fields.as_deref(), fields::MOVIE_DETAILS)?;

    let movie = state
        .service
        .get_details(&MovieKey::from(key.as_str()), &select)
        .await?
        .ok_or_else(|| ApiError::not_found("Movie", &key))?;

    Ok(Json(present_movie(movie)))
}

pub async fn movies_by_year(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
    Query(params): Query<ListQuery>,
) -> Result<Json<MoviePageDto>, ApiError> {
    let select = parse_fields(params.fields.as_deref(), fields::MOVIE_LIST)?;
    let page = params.page.unwrap_or(DEFAULT_PAGE);

    let result = state
        .service
        .get_by_year(year, page, params.sort.as_deref(), DEFAULT_PAGE_SIZE, &select)
        .await?;
    Ok(Json(present_page(result)))
}

pub async fn movies_by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
    Query(params): Query<ListQuery>,
) -> Result<Json<MoviePageDto>, ApiError> {
    let select = parse_fields(params.fields.as_deref(), fields::MOVIE_LIST)?;
    let page = params.page.unwrap_or(DEFAULT_PAGE);

    let result = state
        .service
        .get_by_genre(&genre, page, DEFAULT_PAGE_SIZE, &select)
        .await?;
    Ok(Json(present_page(result)))
}

fn present_page(result: Page<JsonValue>) -> MoviePageDto {
    let pagination = PaginationDto::new(result.page, result.limit, result.total);
    MoviePageDto {
        data: result.data.into_iter().map(present_movie).collect(),
        pagination,
    }
}

/// Apply display formatting in place; fields dropped by the projection are
/// simply absent and stay absent.
fn present_movie(mut row: JsonValue) -> JsonValue {
    if let Some(object) = row.as_object_mut() {
        if let Some(budget) = object.get("budget") {
            let formatted = format_dollars(budget);
            object.insert("budget".to_string(), formatted);
        }
        if let Some(genres) = object.get("genres") {
            let formatted = format_name_list(genres);
            object.insert("genres".to_string(), formatted);
        }
        if let Some(companies) = object.get("production_companies") {
            let formatted = format_name_list(companies);
            object.insert("production_companies".to_string(), formatted);
        }
        if let Some(avg) = object.get("avg_rating") {
            let formatted = format_rating(avg);
            object.insert("avg_rating".to_string(), formatted);
        }
    }
    row
}
