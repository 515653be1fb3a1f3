//! Import preview endpoint
//!
//! Fetches the configured sources live, so responses are slow and depend on
//! the network.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use moji_import::{collect_candidates, load_sources, preview, Fetcher, Preview};
use serde::Deserialize;
use tracing::info;

use crate::error::{check_range, ApiError, ApiResult};
use crate::AppState;

fn default_limit() -> i64 {
    10
}

/// Query parameters for GET /api/preview
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Examples per category, 1..=50
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub filter_bad: bool,
}

/// GET /api/preview
pub async fn preview_sources(
    State(state): State<AppState>,
    params: Result<Query<PreviewParams>, QueryRejection>,
) -> ApiResult<Json<Preview>> {
    let Query(params) = params?;
    let limit = check_range("limit", params.limit, 1, 50)? as usize;

    let sources_path = state.config.sources_path();
    let sources = load_sources(&sources_path)?;
    if sources.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no sources configured in {}",
            sources_path.display()
        )));
    }

    info!("Previewing {} sources", sources.len());
    let fetcher = Fetcher::from_config(&state.config.import)?;
    let candidates = collect_candidates(&sources, &fetcher).await;

    Ok(Json(preview(&candidates, limit, params.filter_bad)))
}

pub fn preview_routes() -> Router<AppState> {
    Router::new().route("/api/preview", get(preview_sources))
}
