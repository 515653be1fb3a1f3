//! Generation endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use moji_common::Category;
use moji_gen::keywords::split_keywords;
use moji_gen::{generate_from_path, rank, GenerateRequest, Lang, Scored};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_range, ApiResult};
use crate::AppState;

pub const DEFAULT_KEYWORDS: &str = "猫 可爱";
pub const DEFAULT_COUNT: i64 = 8;
pub const MAX_COUNT: i64 = 30;

fn default_keywords() -> String {
    DEFAULT_KEYWORDS.to_string()
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

fn default_score() -> bool {
    true
}

/// Query parameters for GET /api/generate
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    /// Whitespace separated keywords
    #[serde(default = "default_keywords")]
    pub keywords: String,
    #[serde(default = "default_count")]
    pub n: i64,
    pub seed: Option<i64>,
    pub lang: Option<String>,
    #[serde(default = "default_score")]
    pub score: bool,
}

/// A generated face, with its score when scoring is on
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GeneratedItem {
    Scored(Scored),
    Plain(String),
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub keywords: Vec<String>,
    pub category: Category,
    pub count: usize,
    pub items: Vec<GeneratedItem>,
}

/// GET /api/generate
///
/// The sample corpus is re-read on every call so imports show up without a
/// restart.
pub async fn generate_faces(
    State(state): State<AppState>,
    params: Result<Query<GenerateParams>, QueryRejection>,
) -> ApiResult<Json<GenerateResponse>> {
    let Query(params) = params?;
    let n = check_range("n", params.n, 1, MAX_COUNT)? as usize;

    let keywords = split_keywords(&params.keywords);
    let lang = params.lang.as_deref().map(Lang::parse).unwrap_or_default();

    // Negative seeds are accepted and reinterpreted bit for bit
    let request = GenerateRequest::new(keywords)
        .with_count(n)
        .with_seed(params.seed.map(|s| s as u64))
        .with_lang(lang);

    let samples_path = state.config.samples_path();
    let generation = generate_from_path(&request, &samples_path);
    debug!(
        category = %generation.category,
        count = generation.items.len(),
        "Generated faces"
    );

    let items: Vec<GeneratedItem> = if params.score {
        rank(generation.items, request.keywords.as_slice(), lang)
            .into_iter()
            .map(GeneratedItem::Scored)
            .collect()
    } else {
        generation.items.into_iter().map(GeneratedItem::Plain).collect()
    };

    Ok(Json(GenerateResponse {
        keywords: generation.keywords,
        category: generation.category,
        count: items.len(),
        items,
    }))
}

pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/api/generate", get(generate_faces))
}
