//! Generation entry point
//!
//! Sample-first: when the corpus holds faces for the requested category, a
//! handful are drawn and lightly mutated. Templates then fill the list up to
//! the requested count. The result is deduplicated in insertion order and
//! truncated.

use crate::keywords::{styles, to_category};
use crate::mutate::mutate_from_sample;
use crate::template::generate_face;
use crate::{Lang, Style};
use moji_common::{Category, SampleCorpus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Default number of faces
pub const DEFAULT_COUNT: usize = 6;

/// Minimum number of corpus samples drawn when any exist
pub const MIN_SAMPLE_DRAW: usize = 4;

/// Template attempts allowed per requested face before giving up
const ATTEMPTS_PER_ITEM: usize = 50;

/// Generation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub keywords: Vec<String>,
    pub n: usize,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
    pub lang: Lang,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            n: DEFAULT_COUNT,
            seed: None,
            lang: Lang::default(),
        }
    }
}

impl GenerateRequest {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }
}

/// Generated faces plus what the keywords resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub keywords: Vec<String>,
    pub category: Category,
    pub styles: Vec<Style>,
    pub items: Vec<String>,
}

/// Ordered set that ignores repeats
#[derive(Default)]
struct Pool {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl Pool {
    fn push(&mut self, face: String) {
        if self.seen.insert(face.clone()) {
            self.items.push(face);
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Push faces from `make` until the pool holds `n` or `max_attempts` are spent
fn fill<F>(pool: &mut Pool, n: usize, max_attempts: usize, mut make: F)
where
    F: FnMut() -> String,
{
    let mut attempts = 0;
    while pool.len() < n && attempts < max_attempts {
        pool.push(make());
        attempts += 1;
    }
}

/// Generate faces for a request against an already loaded corpus
pub fn generate(request: &GenerateRequest, corpus: &SampleCorpus) -> Generation {
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = request.n;
    let category = to_category(request.keywords.as_slice(), request.lang);
    let styles = styles(request.keywords.as_slice(), request.lang);

    let mut pool = Pool::default();

    let samples = corpus.samples(category);
    if !samples.is_empty() && n > 0 {
        let draw = samples.len().min(n.max(MIN_SAMPLE_DRAW));
        for sample in samples.choose_multiple(&mut rng, draw) {
            pool.push(mutate_from_sample(sample, &mut rng));
        }
        debug!(category = %category, drawn = draw, "Drew corpus samples");
    }

    fill(&mut pool, n, n.saturating_mul(ATTEMPTS_PER_ITEM), || {
        generate_face(category, &styles, &mut rng)
    });
    if pool.len() < n {
        debug!(
            category = %category,
            requested = n,
            produced = pool.len(),
            "Template space exhausted before reaching requested count"
        );
    }

    let mut items = pool.items;
    items.truncate(n);

    Generation {
        keywords: request.keywords.clone(),
        category,
        styles,
        items,
    }
}

/// Generate faces, re-reading the corpus file for this call
pub fn generate_from_path(request: &GenerateRequest, samples_path: &Path) -> Generation {
    let corpus = SampleCorpus::load(samples_path);
    generate(request, &corpus)
}
