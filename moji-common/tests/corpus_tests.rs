//! Integration tests for the sample corpus file
//!
//! Covers:
//! - Missing and malformed files degrade to an empty corpus
//! - Save creates parent directories and writes unescaped UTF-8
//! - Save/load keeps per-category order

use moji_common::{Category, SampleCorpus};
use tempfile::TempDir;

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let corpus = SampleCorpus::load(&dir.path().join("nope.json"));
    assert!(corpus.is_empty());
}

#[test]
fn test_load_malformed_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kaomoji.json");
    std::fs::write(&path, "{ not json").unwrap();

    let corpus = SampleCorpus::load(&path);
    assert!(corpus.is_empty());
    assert!(SampleCorpus::try_load(&path).is_err());
}

#[test]
fn test_save_creates_directories_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("kaomoji.json");

    let mut corpus = SampleCorpus::new();
    corpus.push(Category::Cry, "(T_T)".to_string());
    corpus.push(Category::Cry, "(ಥ﹏ಥ)".to_string());
    corpus.push(Category::Cat, "ฅ(^ω^)ฅ".to_string());
    corpus.save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("ಥ﹏ಥ"), "non-ASCII must not be escaped: {}", raw);

    let loaded = SampleCorpus::load(&path);
    assert_eq!(loaded, corpus);
    assert_eq!(loaded.samples(Category::Cry), &["(T_T)", "(ಥ﹏ಥ)"]);
}
