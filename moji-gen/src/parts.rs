//! Part library
//!
//! Per-category slot lists that templates draw from, plus the shared wrap
//! pairs. Every list is non-empty for the slots its category's templates use.

use moji_common::Category;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Named slot in a face template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Eyes,
    Mouth,
    Whisker,
    Paws,
    Nose,
    Ears,
    Tear,
    Outer,
    Vein,
    Bubble,
    Decor,
}

/// Shared decorations
pub const DECOR: &[&str] = &["♡", "♥", "♪", "✧", "★", "☆", "｡", "❀", "❁", "❣", "彡"];

/// Shared paws
pub const PAWS: &[&str] = &["ฅ", "ʢ", "ʡ", "ノ", "∠", "o", "੭", "っ"];

/// Face outline pairs
pub const WRAPS: &[(&str, &str)] = &[("(", ")"), ("（", "）"), ("ʕ", "ʔ"), ("〈", "〉")];

/// Slot lists for one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts {
    slots: BTreeMap<Slot, Vec<&'static str>>,
}

impl Parts {
    /// Build from `(slot, entries)` pairs
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = (Slot, Vec<&'static str>)>,
    {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Part library for a category (`Misc` has none)
    pub fn for_category(category: Category) -> Self {
        let with_extra = |extra: &[&'static str]| -> Vec<&'static str> {
            DECOR.iter().chain(extra).copied().collect()
        };

        match category {
            Category::Cat => Self::from_slots([
                (Slot::Eyes, vec!["^", "･", "•", "˶", "´", "=", "ꈍ", "ᵔ", "˘"]),
                (Slot::Mouth, vec!["ω", " ᴥ ", "ᗝ", "﹏", "⌓", "△", "_", "×"]),
                (Slot::Whisker, vec!["=", "≡"]),
                (Slot::Paws, PAWS.to_vec()),
                (Slot::Decor, with_extra(&["にゃ", "~"])),
            ]),
            Category::Dog => Self::from_slots([
                (Slot::Eyes, vec!["ᵔ", "•", "˘", "＾", "꒳", "ᴗ", "ᴖ"]),
                (Slot::Nose, vec!["ᴥ", "ܫ", "⩊", "ᗣ"]),
                (Slot::Ears, vec!["U", "▼", "∪", "ʋ", "ᑌ"]),
                (Slot::Decor, DECOR.to_vec()),
            ]),
            Category::Cry => Self::from_slots([
                (Slot::Eyes, vec!["˃", "ᵕ", "T", "ಥ", "ó", ";", "•̥", "´", "`", "⌓"]),
                (Slot::Mouth, vec!["ᗝ", "△", "_", "﹏", "×", "o", "ᵕ"]),
                (Slot::Tear, vec!["৹", "꒦", "｡ﾟ", " ﾟ｡", "˃̥", "ᵕ̥"]),
                (Slot::Outer, vec!["๐·°", "°·๐", "｡ﾟ", "ﾟ｡", "°彡", "彡°"]),
                (Slot::Decor, vec!["…", "~", " "]),
            ]),
            Category::Happy => Self::from_slots([
                (Slot::Eyes, vec!["^", "・", "•", "˶", "´", "`", "ᵔ", "≧", "✧"]),
                (Slot::Mouth, vec!["ω", "▽", "ヮ", "ᴗ", "v", "∀", "ㅅ"]),
                (Slot::Decor, with_extra(&["~♪"])),
            ]),
            Category::Angry => Self::from_slots([
                (Slot::Eyes, vec!["`", "ˋ", "ಠ", "థ", "≧", "•"]),
                (Slot::Mouth, vec!["皿", "^", "へ", "益", "︿"]),
                (Slot::Vein, vec!["╬", "凸", "彡", "ᕙ", "ノ", "(#)"]),
                (Slot::Decor, vec!["!", "!!", "!!!"]),
            ]),
            Category::Sleepy => Self::from_slots([
                (Slot::Eyes, vec!["-", "﹃", "﹂", "ᴗ", "_", "ᵕ"]),
                (Slot::Mouth, vec!["_", "﹏", "o", "ᵕ", "ω"]),
                (Slot::Bubble, vec!["zZ", "Zz", "Zzz", "｡oO"]),
                (Slot::Decor, vec!["~"]),
            ]),
            Category::Misc => Self::default(),
        }
    }

    /// Entries of a slot (empty when the category has no such slot)
    pub fn get(&self, slot: Slot) -> &[&'static str] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Uniformly pick one entry of a slot; empty string for an empty slot
    pub fn pick<R: Rng + ?Sized>(&self, slot: Slot, rng: &mut R) -> &'static str {
        self.get(slot).choose(rng).copied().unwrap_or("")
    }

    /// Rebuild every slot list through `f`
    pub fn map_slots<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&[&'static str]) -> Vec<&'static str>,
    {
        Self {
            slots: self
                .slots
                .iter()
                .map(|(slot, entries)| (*slot, f(entries)))
                .collect(),
        }
    }

    /// Every entry across all slots
    pub fn entries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.values().flatten().copied()
    }
}

/// Uniformly pick an outline pair
pub fn pick_wrap<R: Rng + ?Sized>(rng: &mut R) -> (&'static str, &'static str) {
    WRAPS.choose(rng).copied().unwrap_or(("(", ")"))
}
