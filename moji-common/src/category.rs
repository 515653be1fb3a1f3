//! Face categories
//!
//! Every face in the sample corpus and every generated face belongs to one
//! category. `Misc` only ever comes from the import heuristics; the
//! generator has no template for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Face category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cat,
    Dog,
    Cry,
    Happy,
    Angry,
    Sleepy,
    Misc,
}

impl Category {
    /// All categories, in corpus order
    pub const ALL: [Category; 7] = [
        Category::Cat,
        Category::Dog,
        Category::Cry,
        Category::Happy,
        Category::Angry,
        Category::Sleepy,
        Category::Misc,
    ];

    /// Categories with a generation template
    pub const GENERATED: [Category; 6] = [
        Category::Cat,
        Category::Dog,
        Category::Cry,
        Category::Happy,
        Category::Angry,
        Category::Sleepy,
    ];

    /// Corpus key for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cat => "cat",
            Category::Dog => "dog",
            Category::Cry => "cry",
            Category::Happy => "happy",
            Category::Angry => "angry",
            Category::Sleepy => "sleepy",
            Category::Misc => "misc",
        }
    }

    /// Parse a corpus key (exact, lowercase)
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Whether the generator has a template for this category
    pub fn is_generated(&self) -> bool {
        !matches!(self, Category::Misc)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
