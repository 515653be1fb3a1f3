//! Integration tests for moji-web API endpoints
//!
//! Tests cover:
//! - Health and build info endpoints
//! - Generation defaults, validation and scoring
//! - Corpus re-read per request
//! - Keyword exploration
//! - Preview without configured sources
//! - Static site fallback and CORS

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use moji_common::config::MojiConfig;
use moji_common::{Category, SampleCorpus};
use moji_gen::keywords::all_keywords;
use moji_gen::Lang;
use moji_web::{build_router, AppState};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: config pointing every path into `dir`
fn test_config(dir: &Path) -> MojiConfig {
    let mut config = MojiConfig::default();
    config.data_dir = dir.to_path_buf();
    config.samples = Some(dir.join("kaomoji.json"));
    config.sources = Some(dir.join("sources.txt"));
    config.static_dir = dir.join("static");
    config
}

fn setup_app(config: MojiConfig) -> axum::Router {
    build_router(AppState::new(config))
}

async fn get(app: axum::Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn extract_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn extract_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

fn write_corpus(path: &Path, category: Category, faces: &[&str]) -> SampleCorpus {
    let mut corpus = SampleCorpus::new();
    for face in faces {
        corpus.push(category, face.to_string());
    }
    corpus.save(path).unwrap();
    corpus
}

// =============================================================================
// Health / build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "moji-web");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/api/buildinfo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
    assert!(body["build_profile"].is_string());
}

// =============================================================================
// /api/generate
// =============================================================================

#[tokio::test]
async fn test_generate_defaults() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/api/generate").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["keywords"], serde_json::json!(["猫", "可爱"]));
    assert_eq!(body["category"], "cat");
    assert_eq!(body["count"], 8);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 8);
    let scores: Vec<u64> = items.iter().map(|i| i["score"].as_u64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);
    assert!(items.iter().all(|i| i["text"].is_string()));
}

#[tokio::test]
async fn test_generate_without_scores_returns_strings() {
    let dir = TempDir::new().unwrap();
    let response = get(
        setup_app(test_config(dir.path())),
        "/api/generate?keywords=%E5%93%AD&n=3&score=false",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["category"], "cry");
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(Value::is_string));
}

#[tokio::test]
async fn test_generate_rejects_out_of_range_count() {
    let dir = TempDir::new().unwrap();

    for uri in ["/api/generate?n=0", "/api/generate?n=31", "/api/generate?n=-2"] {
        let response = get(setup_app(test_config(dir.path())), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = extract_json(response).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert!(body["error"]["message"].as_str().unwrap().contains("n must be"));
    }
}

#[tokio::test]
async fn test_generate_rejects_malformed_query() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/api/generate?n=many").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_generate_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let uri = "/api/generate?keywords=%E7%8C%AB&n=10&seed=-7";

    let first = extract_json(get(setup_app(test_config(dir.path())), uri).await).await;
    let second = extract_json(get(setup_app(test_config(dir.path())), uri).await).await;
    assert_eq!(first["items"], second["items"]);
}

#[tokio::test]
async fn test_generate_rereads_corpus() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let samples = config.samples_path();
    let uri = "/api/generate?keywords=%E5%93%AD&n=2&seed=5&score=false";

    let before = get(setup_app(config.clone()), uri).await;
    assert_eq!(before.status(), StatusCode::OK);

    // Faces without swappable characters come back verbatim
    let corpus = write_corpus(
        &samples,
        Category::Cry,
        &["(T△T)", "(ಥ﹏ಥ)", "(╥﹏╥)", "｡ﾟ(ﾟ´Д｀ﾟ)ﾟ｡"],
    );

    let body = extract_json(get(setup_app(config), uri).await).await;
    for item in body["items"].as_array().unwrap() {
        let face = item.as_str().unwrap().to_string();
        assert!(corpus.samples(Category::Cry).contains(&face), "{}", face);
    }
}

#[tokio::test]
async fn test_generate_japanese_table() {
    let dir = TempDir::new().unwrap();
    let response = get(
        setup_app(test_config(dir.path())),
        "/api/generate?keywords=%E7%8A%AC&lang=ja&n=4",
    )
    .await;

    let body = extract_json(response).await;
    assert_eq!(body["category"], "dog");
    assert_eq!(body["count"], 4);
}

// =============================================================================
// /api/explore
// =============================================================================

#[tokio::test]
async fn test_explore_summarizes_every_keyword() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    write_corpus(
        &config.samples_path(),
        Category::Cat,
        &["(=^･ω･^=)", "ฅ^•ﻌ•^ฅ", "(=ↀωↀ=)"],
    );

    let response = get(setup_app(config), "/api/explore?limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(body["total"], all_keywords(Lang::Zh).len());
    assert_eq!(items.len(), all_keywords(Lang::Zh).len());

    let cat = &items[0];
    assert_eq!(cat["word"], "猫");
    assert_eq!(cat["label"], "cat");
    assert_eq!(cat["count"], 3);
    assert_eq!(cat["examples"].as_array().unwrap().len(), 2);
    assert!(cat["examples"][0]["score"].as_u64().unwrap() >= cat["examples"][1]["score"].as_u64().unwrap());

    // No dog samples in the corpus
    let dog = items.iter().find(|i| i["label"] == "dog").unwrap();
    assert_eq!(dog["count"], 0);
}

#[tokio::test]
async fn test_explore_validates_ranges() {
    let dir = TempDir::new().unwrap();

    for uri in ["/api/explore?limit=0", "/api/explore?limit=21", "/api/explore?min_score=101"] {
        let response = get(setup_app(test_config(dir.path())), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

// =============================================================================
// /api/preview
// =============================================================================

#[tokio::test]
async fn test_preview_without_sources_is_not_found() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/api/preview").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_preview_validates_limit() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/api/preview?limit=51").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Static site / CORS
// =============================================================================

#[tokio::test]
async fn test_static_index_and_fallback() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.static_dir).unwrap();
    std::fs::write(config.static_dir.join("index.html"), "<h1>moji</h1>").unwrap();
    std::fs::write(config.static_dir.join("main.js"), "console.log('moji')").unwrap();

    let index = get(setup_app(config.clone()), "/").await;
    assert_eq!(index.status(), StatusCode::OK);
    assert!(extract_text(index).await.contains("<h1>moji</h1>"));

    let script = get(setup_app(config.clone()), "/main.js").await;
    assert_eq!(script.status(), StatusCode::OK);
    assert!(extract_text(script).await.contains("console.log"));

    let fallback = get(setup_app(config), "/explore").await;
    assert!(extract_text(fallback).await.contains("<h1>moji</h1>"));
}

#[tokio::test]
async fn test_bundled_web_ui_is_served() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(dir.path());
    config.static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../web/static");

    let index = get(setup_app(config.clone()), "/").await;
    assert_eq!(index.status(), StatusCode::OK);
    assert!(extract_text(index).await.contains("app.js"));

    let script = get(setup_app(config), "/app.js").await;
    assert_eq!(script.status(), StatusCode::OK);
    let script = extract_text(script).await;
    for endpoint in ["/api/generate", "/api/explore", "/api/preview"] {
        assert!(script.contains(endpoint), "app.js does not call {}", endpoint);
    }
}

#[tokio::test]
async fn test_unknown_path_without_static_dir_is_404() {
    let dir = TempDir::new().unwrap();
    let response = get(setup_app(test_config(dir.path())), "/nothing-here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allow_list() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(dir.path());
    config.server.cors_allow_origins = vec!["http://a.example".to_string()];

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://a.example")
        .body(Body::empty())
        .unwrap();
    let response = setup_app(config.clone()).oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://a.example"
    );

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://b.example")
        .body(Body::empty())
        .unwrap();
    let response = setup_app(config).oneshot(request).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_cors_permissive_by_default() {
    let dir = TempDir::new().unwrap();
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let response = setup_app(test_config(dir.path())).oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
