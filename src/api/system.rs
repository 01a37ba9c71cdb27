use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::db;

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check: pings both backing stores.
pub async fn status(State(state): State<Arc<AppState>>) -> Result<Json<SystemStatus>, ApiError> {
    db::ping(&state.movies).await?;
    db::ping(&state.ratings).await?;

    Ok(Json(SystemStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
