//! Corpus cleaning pass
//!
//! Scraped lists drag in markup, CSS and prose. Cleaning keeps only entries
//! passing the strict face filter and removes duplicates across the whole
//! corpus, the first occurrence (in key order) winning.

use moji_common::face::is_valid_face;
use moji_common::SampleCorpus;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Entries kept
    pub kept: usize,
    /// Entries before cleaning
    pub total: usize,
    /// Entries rejected by the face filter (duplicates not counted)
    pub removed: usize,
}

pub fn clean(corpus: &SampleCorpus) -> (SampleCorpus, CleanReport) {
    let mut cleaned = SampleCorpus::new();
    let mut report = CleanReport::default();
    let mut seen = HashSet::new();

    for (key, faces) in corpus.iter() {
        let mut kept = Vec::new();
        for face in faces {
            report.total += 1;
            let face = face.trim();
            if !is_valid_face(face) {
                report.removed += 1;
                continue;
            }
            if seen.insert(face.to_string()) {
                kept.push(face.to_string());
            }
        }
        debug!(category = key, before = faces.len(), after = kept.len(), "Cleaned category");
        report.kept += kept.len();
        cleaned.insert(key, kept);
    }

    (cleaned, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moji_common::Category;

    #[test]
    fn test_clean_filters_and_dedups_globally() {
        let mut corpus = SampleCorpus::new();
        corpus.insert(
            "cat",
            vec![
                " (=^･ω･^=) ".to_string(),
                "<span class=\"k\">(^_^)</span>".to_string(),
                "(=^･ω･^=)".to_string(),
            ],
        );
        corpus.insert(
            "happy",
            vec!["(=^･ω･^=)".to_string(), "Hello (^_^)".to_string(), "(^_^)".to_string()],
        );

        let (cleaned, report) = clean(&corpus);

        assert_eq!(cleaned.samples(Category::Cat), &["(=^･ω･^=)".to_string()]);
        assert_eq!(cleaned.samples(Category::Happy), &["(^_^)".to_string()]);
        assert_eq!(
            report,
            CleanReport {
                kept: 2,
                total: 6,
                removed: 2,
            }
        );
    }

    #[test]
    fn test_clean_keeps_empty_lists() {
        let mut corpus = SampleCorpus::new();
        corpus.insert("sleepy", vec!["font-size: 12px".to_string()]);

        let (cleaned, report) = clean(&corpus);
        assert!(cleaned.keys().any(|k| k == "sleepy"));
        assert!(cleaned.is_empty());
        assert_eq!(report.removed, 1);
    }
}
