//! Relevance scoring
//!
//! Ranks a face against the keywords that asked for it. The score is a sum
//! of three capped components, 0..=100 overall:
//!
//! | component      | max | rule |
//! |----------------|-----|------|
//! | classification | 50  | categorizer agrees with the keyword category (25 when no category keyword, 10 for misc) |
//! | part affinity  | 30  | 10 per distinct part of the keyword category found in the face |
//! | style fit      | 20  | share per satisfied style; without styles, short faces score higher |

use crate::bias::{contains_any, CUTE_MARKS, DECOR_MARKS};
use crate::keywords::{category_of, styles};
use crate::parts::Parts;
use crate::{Lang, Style};
use moji_common::face::categorize;
use moji_common::Category;
use serde::Serialize;
use std::collections::BTreeSet;

const CLASSIFICATION_MATCH: u32 = 50;
const CLASSIFICATION_NEUTRAL: u32 = 25;
const CLASSIFICATION_MISC: u32 = 10;
const PART_POINTS: u32 = 10;
const PART_CAP: u32 = 30;
const STYLE_POINTS: u32 = 20;
const SHORT_FACE_CHARS: usize = 12;

/// A face with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scored {
    pub text: String,
    pub score: u8,
}

/// Scores faces against one keyword set
///
/// Resolves category, styles and part marks once so ranking a list does not
/// repeat the keyword lookups.
#[derive(Debug, Clone)]
pub struct Scorer {
    category: Option<Category>,
    styles: Vec<Style>,
    part_marks: BTreeSet<&'static str>,
}

impl Scorer {
    pub fn new<S: AsRef<str>>(keywords: &[S], lang: Lang) -> Self {
        let category = category_of(keywords, lang);
        let parts = Parts::for_category(category.unwrap_or(Category::Happy));
        let part_marks = parts
            .entries()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            category,
            styles: styles(keywords, lang),
            part_marks,
        }
    }

    fn classification(&self, face: &str) -> u32 {
        let Some(target) = self.category else {
            return CLASSIFICATION_NEUTRAL;
        };
        match categorize(face) {
            found if found == target => CLASSIFICATION_MATCH,
            Category::Misc => CLASSIFICATION_MISC,
            _ => 0,
        }
    }

    fn part_affinity(&self, face: &str) -> u32 {
        let found = self
            .part_marks
            .iter()
            .filter(|mark| face.contains(*mark))
            .count() as u32;
        (found * PART_POINTS).min(PART_CAP)
    }

    fn style_fit(&self, face: &str) -> u32 {
        if self.styles.is_empty() {
            return if face.chars().count() <= SHORT_FACE_CHARS {
                STYLE_POINTS
            } else {
                STYLE_POINTS / 2
            };
        }

        let satisfied = self
            .styles
            .iter()
            .filter(|style| match style {
                Style::Cute => contains_any(face, CUTE_MARKS),
                Style::Minimal => !contains_any(face, DECOR_MARKS),
                Style::Exaggerated => contains_any(face, DECOR_MARKS),
            })
            .count() as u32;
        satisfied * STYLE_POINTS / self.styles.len() as u32
    }

    /// Relevance of one face, 0..=100
    pub fn score(&self, face: &str) -> u8 {
        let total = self.classification(face) + self.part_affinity(face) + self.style_fit(face);
        total.min(100) as u8
    }

    /// Score and sort faces, best first; ties keep input order
    pub fn rank<I, S>(&self, faces: I) -> Vec<Scored>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scored: Vec<Scored> = faces
            .into_iter()
            .map(|face| {
                let text = face.into();
                let score = self.score(&text);
                Scored { text, score }
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

/// Relevance of one face against keywords
pub fn score<S: AsRef<str>>(face: &str, keywords: &[S], lang: Lang) -> u8 {
    Scorer::new(keywords, lang).score(face)
}

/// Score and sort faces against keywords, best first
pub fn rank<I, F, S>(faces: I, keywords: &[S], lang: Lang) -> Vec<Scored>
where
    I: IntoIterator<Item = F>,
    F: Into<String>,
    S: AsRef<str>,
{
    Scorer::new(keywords, lang).rank(faces)
}
