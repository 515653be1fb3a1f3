//! Keyword exploration endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use moji_common::SampleCorpus;
use moji_gen::explore::{explore, KeywordStats};
use moji_gen::Lang;
use serde::{Deserialize, Serialize};

use crate::error::{check_range, ApiResult};
use crate::AppState;

fn default_limit() -> i64 {
    5
}

fn default_min_score() -> i64 {
    1
}

/// Query parameters for GET /api/explore
#[derive(Debug, Deserialize)]
pub struct ExploreParams {
    /// Examples per keyword, 1..=20
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Minimum score for a face to count, 0..=100
    #[serde(default = "default_min_score")]
    pub min_score: i64,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExploreResponse {
    pub total: usize,
    pub items: Vec<KeywordStats>,
}

/// GET /api/explore
pub async fn explore_keywords(
    State(state): State<AppState>,
    params: Result<Query<ExploreParams>, QueryRejection>,
) -> ApiResult<Json<ExploreResponse>> {
    let Query(params) = params?;
    let limit = check_range("limit", params.limit, 1, 20)? as usize;
    let min_score = check_range("min_score", params.min_score, 0, 100)? as u8;
    let lang = params.lang.as_deref().map(Lang::parse).unwrap_or_default();

    let corpus = SampleCorpus::load(&state.config.samples_path());
    let items = explore(&corpus, lang, limit, min_score);

    Ok(Json(ExploreResponse {
        total: items.len(),
        items,
    }))
}

pub fn explore_routes() -> Router<AppState> {
    Router::new().route("/api/explore", get(explore_keywords))
}
