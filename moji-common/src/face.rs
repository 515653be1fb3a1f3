//! Face heuristics shared by the importer, the cleaner and the scorer
//!
//! None of these checks understand kaomoji; they are character-level
//! heuristics tuned against scraped pages. Lengths are counted in Unicode
//! scalar values.

use crate::Category;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that suggest a string is a face rather than prose
pub const FACE_HINT_CHARS: &str = "()（）ʕʔ╯┻ツω益ᴥಠಥ；;TToO＿_＾^・·｡ﾟ♥♡✧ᵕᵔ";

/// Minimum face length (characters)
pub const MIN_FACE_CHARS: usize = 2;

/// Maximum face length (characters)
pub const MAX_FACE_CHARS: usize = 60;

/// Markup and code fragments that never occur in a real face
const BAD_TOKENS: &[&str] = &[
    "<div", "</div", "<span", "</span", "<option", "</option", "class=", "style=",
    "font-size", "px", "!important", "</", "<script", "</script", "http://", "https://",
];

/// Letter runs allowed to reach four characters
const WORD_EXCEPTIONS: &[&str] = &["chu", "nyan", "nya", "zzz"];

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]{4,}").expect("letter run pattern is valid")
});

/// Ordered categorizer rules; first match wins
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Cry,
        &["T_T", "；；", ";;", "•̥", "꒦", "｡ﾟ", " ﾟ｡", "ಥ", "つД", "ノД", "༎ຶ", "(T", "；_；"],
    ),
    (
        Category::Angry,
        &["益", "皿", "凸", "╬", "`д´", "ಠ益", "(╯", "#`", "｀Д´"],
    ),
    (Category::Sleepy, &["zZ", "Zz", "｡oO", "-_-", "(－_－)"]),
    (Category::Cat, &["=^", "ฅ", "ᆺ", "ↀ"]),
    (Category::Dog, &["ᴥ", "（U・", "(U･", "∪･"]),
    (
        Category::Happy,
        &["＾▽＾", "^_^", "(＾", "≧▽≦", "٩", "(￣", "(⌒", "♪", "✧", "(˶ᵔ"],
    ),
];

/// Trim and collapse every whitespace run to a single space
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the string contains at least one face hint character
pub fn has_face_hint(s: &str) -> bool {
    s.chars().any(|c| FACE_HINT_CHARS.contains(c))
}

fn length_ok(s: &str) -> bool {
    let len = s.chars().count();
    (MIN_FACE_CHARS..=MAX_FACE_CHARS).contains(&len)
}

/// Loose filter applied while extracting candidates from fetched text
pub fn is_face_like(s: &str) -> bool {
    if s.is_empty() || !length_ok(s) {
        return false;
    }
    if s.starts_with('#') {
        return false;
    }
    has_face_hint(s)
}

/// Strict filter applied when cleaning the corpus
///
/// Rejects markup, code, URLs and anything with an English-looking word.
pub fn is_valid_face(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() || !length_ok(s) {
        return false;
    }

    let lower = s.to_lowercase();
    if BAD_TOKENS.iter().any(|tok| lower.contains(tok)) {
        return false;
    }
    if s.contains('<') || s.contains('>') || s.contains("&#") {
        return false;
    }
    if s.chars().any(|c| matches!(c, '{' | '}' | ';')) {
        return false;
    }

    for m in LETTER_RUN.find_iter(s) {
        let word = m.as_str().to_lowercase();
        if !WORD_EXCEPTIONS.contains(&word.as_str()) {
            return false;
        }
    }

    has_face_hint(s)
}

/// Heuristically classify a face by its marker substrings
pub fn categorize(face: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| face.contains(m)))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Misc)
}
