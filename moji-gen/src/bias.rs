//! Style bias over the part library
//!
//! Each style narrows every slot list with a substring filter. A filter that
//! would empty a slot leaves that slot untouched, so templates always have
//! something to pick.

use crate::parts::Parts;
use crate::Style;

/// Marks that read as cute
pub const CUTE_MARKS: &[&str] = &["ω", "ᵕ", "ᵔ", "♡", "♥", "✧", "･", "•", "▽", "∀"];

/// Decorative marks; minimal drops them, exaggerated seeks them
pub const DECOR_MARKS: &[&str] = &["♡", "♥", "✧", "♪", "彡", "｡", "ﾟ", "~"];

/// Whether `s` contains any of `marks`
pub fn contains_any(s: &str, marks: &[&str]) -> bool {
    marks.iter().any(|m| s.contains(m))
}

fn keep_or_original<F>(entries: &[&'static str], keep: F) -> Vec<&'static str>
where
    F: Fn(&str) -> bool,
{
    let kept: Vec<_> = entries.iter().copied().filter(|e| keep(e)).collect();
    if kept.is_empty() {
        entries.to_vec()
    } else {
        kept
    }
}

/// Apply the requested styles to a part library
///
/// Cute, then minimal, then exaggerated, regardless of keyword order.
pub fn bias(parts: &Parts, styles: &[Style]) -> Parts {
    let mut out = parts.clone();

    if styles.contains(&Style::Cute) {
        out = out.map_slots(|entries| keep_or_original(entries, |e| contains_any(e, CUTE_MARKS)));
    }
    if styles.contains(&Style::Minimal) {
        out = out.map_slots(|entries| keep_or_original(entries, |e| !contains_any(e, DECOR_MARKS)));
    }
    if styles.contains(&Style::Exaggerated) {
        out = out.map_slots(|entries| keep_or_original(entries, |e| contains_any(e, DECOR_MARKS)));
    }

    out
}
