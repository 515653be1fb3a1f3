//! Keyword tables
//!
//! One category table and one style table per language. Lookups try the
//! requested language first, then the other tables, so shared words such as
//! 猫 resolve regardless of the selected language.

use moji_common::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword table language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    Ja,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Zh, Lang::Ja];

    /// Parse a language code; anything unrecognized falls back to Chinese
    pub fn parse(s: &str) -> Lang {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "ja-jp" => Lang::Ja,
            _ => Lang::Zh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::Ja => "ja",
        }
    }

    /// Requested language first, then the rest
    fn lookup_order(self) -> impl Iterator<Item = Lang> {
        std::iter::once(self).chain(Lang::ALL.into_iter().filter(move |l| *l != self))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style modifier that biases part selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Cute,
    Minimal,
    Exaggerated,
}

const ZH_CATEGORIES: &[(&str, Category)] = &[
    ("猫", Category::Cat),
    ("喵", Category::Cat),
    ("小猫", Category::Cat),
    ("狗", Category::Dog),
    ("汪", Category::Dog),
    ("小狗", Category::Dog),
    ("哭", Category::Cry),
    ("难过", Category::Cry),
    ("伤心", Category::Cry),
    ("委屈", Category::Cry),
    ("呜呜", Category::Cry),
    ("开心", Category::Happy),
    ("高兴", Category::Happy),
    ("笑", Category::Happy),
    ("生气", Category::Angry),
    ("愤怒", Category::Angry),
    ("凶", Category::Angry),
    ("困", Category::Sleepy),
    ("困了", Category::Sleepy),
    ("累", Category::Sleepy),
    ("疲惫", Category::Sleepy),
];

const JA_CATEGORIES: &[(&str, Category)] = &[
    ("猫", Category::Cat),
    ("ねこ", Category::Cat),
    ("ネコ", Category::Cat),
    ("にゃん", Category::Cat),
    ("犬", Category::Dog),
    ("いぬ", Category::Dog),
    ("イヌ", Category::Dog),
    ("わんこ", Category::Dog),
    ("泣く", Category::Cry),
    ("悲しい", Category::Cry),
    ("涙", Category::Cry),
    ("嬉しい", Category::Happy),
    ("楽しい", Category::Happy),
    ("笑う", Category::Happy),
    ("怒る", Category::Angry),
    ("怒り", Category::Angry),
    ("ムカつく", Category::Angry),
    ("眠い", Category::Sleepy),
    ("眠たい", Category::Sleepy),
    ("疲れた", Category::Sleepy),
];

const ZH_STYLES: &[(&str, Style)] = &[
    ("可爱", Style::Cute),
    ("卖萌", Style::Cute),
    ("萌", Style::Cute),
    ("简洁", Style::Minimal),
    ("极简", Style::Minimal),
    ("高冷", Style::Minimal),
    ("夸张", Style::Exaggerated),
    ("浮夸", Style::Exaggerated),
];

const JA_STYLES: &[(&str, Style)] = &[
    ("かわいい", Style::Cute),
    ("可愛い", Style::Cute),
    ("萌え", Style::Cute),
    ("シンプル", Style::Minimal),
    ("クール", Style::Minimal),
    ("派手", Style::Exaggerated),
    ("大げさ", Style::Exaggerated),
];

fn category_table(lang: Lang) -> &'static [(&'static str, Category)] {
    match lang {
        Lang::Zh => ZH_CATEGORIES,
        Lang::Ja => JA_CATEGORIES,
    }
}

fn style_table(lang: Lang) -> &'static [(&'static str, Style)] {
    match lang {
        Lang::Zh => ZH_STYLES,
        Lang::Ja => JA_STYLES,
    }
}

/// Every `(word, category)` pair of a language table
pub fn all_keywords(lang: Lang) -> &'static [(&'static str, Category)] {
    category_table(lang)
}

/// Category named by a single word, if any
pub fn lookup_category(word: &str, lang: Lang) -> Option<Category> {
    lang.lookup_order().find_map(|l| {
        category_table(l)
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, c)| *c)
    })
}

/// Style named by a single word, if any
pub fn lookup_style(word: &str, lang: Lang) -> Option<Style> {
    lang.lookup_order().find_map(|l| {
        style_table(l)
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, s)| *s)
    })
}

/// First category named by the keywords, if any
pub fn category_of<S: AsRef<str>>(words: &[S], lang: Lang) -> Option<Category> {
    words
        .iter()
        .find_map(|w| lookup_category(w.as_ref(), lang))
        .filter(Category::is_generated)
}

/// Category to generate for; defaults to happy
pub fn to_category<S: AsRef<str>>(words: &[S], lang: Lang) -> Category {
    category_of(words, lang).unwrap_or(Category::Happy)
}

/// Styles named by the keywords, in input order without repeats
pub fn styles<S: AsRef<str>>(words: &[S], lang: Lang) -> Vec<Style> {
    let mut out = Vec::new();
    for style in words.iter().filter_map(|w| lookup_style(w.as_ref(), lang)) {
        if !out.contains(&style) {
            out.push(style);
        }
    }
    out
}

/// Split a whitespace separated keyword string
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
