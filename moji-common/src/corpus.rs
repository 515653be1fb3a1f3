//! Flat JSON sample corpus
//!
//! The corpus file is a single JSON object mapping a category name to an
//! array of face strings:
//!
//! ```json
//! { "cat": ["(=^･ω･^=)"], "cry": ["(T_T)"] }
//! ```
//!
//! Loading is forgiving: a missing or malformed file yields an empty corpus.
//! Unknown category keys are kept so a round trip never loses data.

use crate::{Category, Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// File name of the corpus inside the data directory
pub const CORPUS_FILE_NAME: &str = "kaomoji.json";

/// In-memory sample corpus (category name → faces, insertion order per list)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleCorpus {
    entries: BTreeMap<String, Vec<String>>,
}

impl SampleCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the corpus from disk
    ///
    /// Never fails: a missing file is an empty corpus, an unreadable or
    /// malformed one is an empty corpus plus a warning.
    pub fn load(path: &Path) -> Self {
        if !path.is_file() {
            debug!(path = %path.display(), "Sample corpus not found, using empty corpus");
            return Self::new();
        }

        match Self::try_load(path) {
            Ok(corpus) => {
                debug!(path = %path.display(), total = corpus.total(), "Loaded sample corpus");
                corpus
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load sample corpus, using empty corpus");
                Self::new()
            }
        }
    }

    /// Load the corpus from disk, reporting I/O and JSON errors
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(value)
    }

    /// Build a corpus from a parsed JSON document
    ///
    /// Non-array values are dropped; non-string array entries are stringified.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidInput(
                "sample corpus must be a JSON object".to_string(),
            ));
        };

        let mut entries = BTreeMap::new();
        for (key, items) in map {
            if let Value::Array(items) = items {
                let faces = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect();
                entries.insert(key, faces);
            }
        }

        Ok(Self { entries })
    }

    /// Write the corpus as pretty-printed UTF-8 JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), total = self.total(), "Saved sample corpus");
        Ok(())
    }

    /// Samples stored for a category (empty slice when absent)
    pub fn samples(&self, category: Category) -> &[String] {
        self.get(category.as_str())
    }

    /// Samples stored under a raw key (empty slice when absent)
    pub fn get(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a face to a category list
    pub fn push(&mut self, category: Category, face: String) {
        self.entries
            .entry(category.as_str().to_string())
            .or_default()
            .push(face);
    }

    /// Replace the list stored under a raw key
    pub fn insert(&mut self, key: impl Into<String>, faces: Vec<String>) {
        self.entries.insert(key.into(), faces);
    }

    /// Add an empty list for every known category that is missing
    pub fn ensure_categories(&mut self) {
        for cat in Category::ALL {
            self.entries.entry(cat.as_str().to_string()).or_default();
        }
    }

    /// Cap every list at `max` entries, keeping the oldest
    pub fn truncate(&mut self, max: usize) {
        for faces in self.entries.values_mut() {
            faces.truncate(max);
        }
    }

    /// Total number of faces across all categories
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the corpus holds no faces at all
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(key, faces)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Category keys present in the corpus
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_drops_non_arrays_and_stringifies_entries() {
        let corpus = SampleCorpus::from_value(json!({
            "cat": ["(=^･ω･^=)", 7],
            "note": "not a list",
        }))
        .unwrap();

        assert_eq!(corpus.samples(Category::Cat), &["(=^･ω･^=)", "7"]);
        assert!(corpus.get("note").is_empty());
        assert_eq!(corpus.total(), 2);
    }

    #[test]
    fn test_from_value_rejects_top_level_array() {
        assert!(SampleCorpus::from_value(json!(["(^_^)"])).is_err());
    }

    #[test]
    fn test_ensure_categories_and_truncate() {
        let mut corpus = SampleCorpus::new();
        corpus.insert("cat", vec!["a1".into(), "a2".into(), "a3".into()]);
        corpus.ensure_categories();
        assert_eq!(corpus.keys().count(), Category::ALL.len());

        corpus.truncate(2);
        assert_eq!(corpus.samples(Category::Cat), &["a1", "a2"]);
        assert!(corpus.samples(Category::Misc).is_empty());
    }
}
