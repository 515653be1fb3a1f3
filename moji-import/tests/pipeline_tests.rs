//! Integration tests for the import pipeline against a local HTTP server
//!
//! Tests cover:
//! - Text, JSON and HTML sources merged into one corpus
//! - Failing sources are counted and skipped
//! - Re-importing the same sources adds nothing
//! - Candidate collection feeding the preview

use axum::{http::header, response::IntoResponse, routing::get, Router};
use moji_common::{Category, SampleCorpus};
use moji_import::{collect_candidates, import, preview, Fetcher, ImportOptions};
use std::time::Duration;
use tempfile::TempDir;

const TEXT_PAGE: &str = "# cat faces\n(=^･ω･^=)\nฅ^•ﻌ•^ฅ\nplain text line\n";
const JSON_PAGE: &str = r#"{"misc": ["(T_T)", "ʕ•ᴥ•ʔ"], "count": 2}"#;
const HTML_PAGE: &str =
    "<html><body><ul><li><span>(╬ಠ益ಠ)</span></li><li>(-_-) zzZ</li></ul></body></html>";

async fn json_page() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], JSON_PAGE)
}

/// Serve the fixture pages on an ephemeral port, returning the base URL
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/faces.txt", get(|| async { TEXT_PAGE }))
        .route("/faces.json", get(json_page))
        .route("/faces.html", get(|| async { axum::response::Html(HTML_PAGE) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fetcher() -> Fetcher {
    Fetcher::new("moji-import-test", Duration::from_secs(5)).unwrap()
}

fn sources(base: &str) -> Vec<String> {
    ["/faces.txt", "/faces.json", "/faces.html", "/missing"]
        .iter()
        .map(|path| format!("{}{}", base, path))
        .collect()
}

#[tokio::test]
async fn test_import_merges_all_source_kinds() {
    let base = spawn_server().await;

    let (corpus, report) = import(
        &sources(&base),
        SampleCorpus::new(),
        &fetcher(),
        ImportOptions::default(),
    )
    .await;

    assert_eq!(report.sources, 4);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total, corpus.total());

    assert!(corpus.samples(Category::Cat).contains(&"(=^･ω･^=)".to_string()));
    assert!(corpus.samples(Category::Cry).contains(&"(T_T)".to_string()));
    assert!(corpus.samples(Category::Dog).contains(&"ʕ•ᴥ•ʔ".to_string()));
    assert!(corpus.samples(Category::Angry).contains(&"(╬ಠ益ಠ)".to_string()));
    assert!(corpus.samples(Category::Sleepy).contains(&"(-_-) zzZ".to_string()));

    // JSON keys are not trusted: "misc" was reclassified
    assert!(corpus.samples(Category::Misc).is_empty());
}

#[tokio::test]
async fn test_reimport_adds_nothing() {
    let base = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("kaomoji.json");
    let fetcher = fetcher();

    let (corpus, first) = import(
        &sources(&base),
        SampleCorpus::load(&path),
        &fetcher,
        ImportOptions::default(),
    )
    .await;
    corpus.save(&path).unwrap();
    assert!(first.added > 0);

    let (corpus, second) = import(
        &sources(&base),
        SampleCorpus::load(&path),
        &fetcher,
        ImportOptions::default(),
    )
    .await;
    assert_eq!(second.added, 0);
    assert_eq!(corpus.total(), first.total);
}

#[tokio::test]
async fn test_failing_fetch_is_an_error() {
    let base = spawn_server().await;
    let result = fetcher().fetch(&format!("{}/missing", base)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_preview_of_collected_candidates() {
    let base = spawn_server().await;

    let candidates = collect_candidates(&sources(&base), &fetcher()).await;
    let result = preview(&candidates, 10, true);

    assert!(result.total > 0);
    assert!(result.items.iter().all(|item| item.count > 0));
    assert!(result.items.iter().all(|item| item.examples.len() <= 10));
    let categories: Vec<Category> = result.items.iter().map(|i| i.category).collect();
    assert!(categories.contains(&Category::Angry));
}
