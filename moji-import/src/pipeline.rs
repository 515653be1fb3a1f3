//! Import pipeline: fetch, extract, classify, merge
//!
//! Merging is append-only. Existing corpus entries keep their position and
//! new faces are appended to the list of the category `categorize` picks.
//! Duplicates are detected on the whitespace-normalized form, across all
//! categories.

use crate::extract::extract_faces;
use crate::fetch::Fetcher;
use moji_common::face::{categorize, normalize};
use moji_common::SampleCorpus;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Default per-category cap applied after merging
pub const DEFAULT_MAX_PER_CATEGORY: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    pub max_per_category: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            max_per_category: DEFAULT_MAX_PER_CATEGORY,
        }
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Sources attempted
    pub sources: usize,
    /// Sources that failed to fetch
    pub failed: usize,
    /// Faces appended to the corpus
    pub added: usize,
    /// Corpus size after truncation
    pub total: usize,
}

/// Accumulates new faces into a corpus, skipping anything already present
pub struct Merger {
    corpus: SampleCorpus,
    seen: HashSet<String>,
    added: usize,
}

impl Merger {
    pub fn new(mut corpus: SampleCorpus) -> Self {
        corpus.ensure_categories();
        let seen = corpus
            .iter()
            .flat_map(|(_, faces)| faces.iter().map(|f| normalize(f)))
            .collect();
        Self {
            corpus,
            seen,
            added: 0,
        }
    }

    /// Merge extracted faces, returning how many were new
    pub fn add_faces<I, S>(&mut self, faces: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for face in faces {
            let face = normalize(face.as_ref());
            if face.is_empty() || self.seen.contains(&face) {
                continue;
            }
            self.seen.insert(face.clone());
            self.corpus.push(categorize(&face), face);
            added += 1;
        }
        self.added += added;
        added
    }

    pub fn added(&self) -> usize {
        self.added
    }

    /// Apply the per-category cap and hand back the corpus
    pub fn finish(mut self, max_per_category: usize) -> SampleCorpus {
        self.corpus.truncate(max_per_category);
        self.corpus
    }
}

/// Fetch every source and merge its faces into `corpus`
///
/// Best effort: a source that fails to fetch is logged and skipped.
pub async fn import(
    sources: &[String],
    corpus: SampleCorpus,
    fetcher: &Fetcher,
    options: ImportOptions,
) -> (SampleCorpus, ImportReport) {
    let mut merger = Merger::new(corpus);
    let mut report = ImportReport {
        sources: sources.len(),
        ..Default::default()
    };

    for url in sources {
        match fetcher.fetch(url).await {
            Ok(text) => {
                let faces = extract_faces(&text);
                let added = merger.add_faces(&faces);
                info!(url = %url, found = faces.len(), added, "Imported source");
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Skipping source");
                report.failed += 1;
            }
        }
    }

    report.added = merger.added();
    let corpus = merger.finish(options.max_per_category);
    report.total = corpus.total();
    (corpus, report)
}

/// Merge already-fetched page texts into `corpus`
pub fn import_texts<I, S>(
    texts: I,
    corpus: SampleCorpus,
    options: ImportOptions,
) -> (SampleCorpus, ImportReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merger = Merger::new(corpus);
    let mut report = ImportReport::default();

    for text in texts {
        report.sources += 1;
        let faces = extract_faces(text.as_ref());
        let added = merger.add_faces(&faces);
        debug!(found = faces.len(), added, "Merged text");
    }

    report.added = merger.added();
    let corpus = merger.finish(options.max_per_category);
    report.total = corpus.total();
    (corpus, report)
}
