//! Light mutation of corpus samples
//!
//! Swaps common parts for look-alikes so sampled faces do not come back
//! verbatim.

use rand::seq::SliceRandom;
use rand::Rng;

/// Per-character swap probability
pub const SWAP_PROBABILITY: f64 = 0.35;

/// Look-alike replacements for a character
pub fn swaps_for(c: char) -> Option<&'static [&'static str]> {
    let swaps: &'static [&'static str] = match c {
        'ω' => &["ᵕ", "ᴗ", "▽"],
        'ᴥ' => &["ᗝ", "⩊"],
        '·' => &["・", " "],
        '^' => &["ᵔ", "˘", "・"],
        '・' => &["·", "^"],
        '_' => &["﹏", "o"],
        '♡' => &["♥", "✧", ""],
        _ => return None,
    };
    Some(swaps)
}

/// Randomly swap swappable characters of a sample
pub fn mutate_from_sample<R: Rng + ?Sized>(sample: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(sample.len());
    for c in sample.chars() {
        match swaps_for(c) {
            Some(swaps) if rng.gen_bool(SWAP_PROBABILITY) => {
                out.push_str(swaps.choose(rng).copied().unwrap_or_default());
            }
            _ => out.push(c),
        }
    }
    out
}
