//! Keyword exploration over the sample corpus
//!
//! For every keyword of a language table, scores the corpus faces of that
//! keyword's category against the keyword alone and summarizes the result.

use crate::keywords::all_keywords;
use crate::score::{Scored, Scorer};
use crate::Lang;
use moji_common::{Category, SampleCorpus};
use serde::Serialize;

/// Per-keyword summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordStats {
    pub word: String,
    pub label: Category,
    /// Faces scoring at least the minimum
    pub count: usize,
    /// Mean score of the counted faces, one decimal
    pub avg_score: f64,
    pub max_score: u8,
    /// Best faces, at most `limit`
    pub examples: Vec<Scored>,
}

/// Summaries for every keyword of the language table, in table order
pub fn explore(corpus: &SampleCorpus, lang: Lang, limit: usize, min_score: u8) -> Vec<KeywordStats> {
    all_keywords(lang)
        .iter()
        .map(|(word, category)| keyword_stats(corpus, lang, word, *category, limit, min_score))
        .collect()
}

fn keyword_stats(
    corpus: &SampleCorpus,
    lang: Lang,
    word: &str,
    category: Category,
    limit: usize,
    min_score: u8,
) -> KeywordStats {
    let scorer = Scorer::new(&[word], lang);
    let kept: Vec<Scored> = scorer
        .rank(corpus.samples(category).iter().map(String::as_str))
        .into_iter()
        .filter(|s| s.score >= min_score)
        .collect();

    let count = kept.len();
    let max_score = kept.first().map(|s| s.score).unwrap_or(0);
    let avg_score = if count == 0 {
        0.0
    } else {
        let sum: u32 = kept.iter().map(|s| u32::from(s.score)).sum();
        (f64::from(sum) / count as f64 * 10.0).round() / 10.0
    };

    let mut examples = kept;
    examples.truncate(limit);

    KeywordStats {
        word: word.to_string(),
        label: category,
        count,
        avg_score,
        max_score,
        examples,
    }
}
