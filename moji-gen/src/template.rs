//! Per-category face templates
//!
//! Each template function is stateless: biased parts plus a random source in,
//! one face out. Layout strings use `L`/`R` for the outline pair.

use crate::bias::bias;
use crate::parts::{pick_wrap, Parts, Slot};
use crate::Style;
use moji_common::Category;
use rand::seq::SliceRandom;
use rand::Rng;

/// Either nothing or one decor entry, with equal probability
fn optional_decor<R: Rng + ?Sized>(parts: &Parts, rng: &mut R) -> &'static str {
    if rng.gen_bool(0.5) {
        ""
    } else {
        parts.pick(Slot::Decor, rng)
    }
}

/// Cat: whisker_ears, paws_round or paws_tail
pub fn cat<R: Rng + ?Sized>(p: &Parts, rng: &mut R) -> String {
    let (l, r) = pick_wrap(rng);
    match rng.gen_range(0..3) {
        0 => {
            let w = p.pick(Slot::Whisker, rng);
            let e = p.pick(Slot::Eyes, rng);
            let m = p.pick(Slot::Mouth, rng);
            format!("{l}{w}{e}･{m}･{e}{w}{r}")
        }
        1 => {
            let e = p.pick(Slot::Eyes, rng);
            let m = p.pick(Slot::Mouth, rng);
            let paw = p.pick(Slot::Paws, rng);
            let dec = optional_decor(p, rng);
            format!("{paw}{l}{e}{m}{e}{r}{paw}{dec}")
        }
        _ => {
            let e = p.pick(Slot::Eyes, rng);
            let m = p.pick(Slot::Mouth, rng);
            let paw = p.pick(Slot::Paws, rng);
            let dec = ["♡", "♥", "", ""].choose(rng).copied().unwrap_or("");
            format!("{paw}^{e}{m}{e}^{paw}{dec}")
        }
    }
}

/// Dog: ears_nose or round_face
pub fn dog<R: Rng + ?Sized>(p: &Parts, rng: &mut R) -> String {
    let (l, r) = pick_wrap(rng);
    if rng.gen_bool(0.5) {
        let ear = p.pick(Slot::Ears, rng);
        let nose = p.pick(Slot::Nose, rng);
        let mid = ["・", "·", " "].choose(rng).copied().unwrap_or("・");
        format!("{l}{ear}{mid}{nose}{mid}{ear}{r}")
    } else {
        let eye = p.pick(Slot::Eyes, rng);
        let nose = p.pick(Slot::Nose, rng);
        format!("{l}{eye}{nose}{eye}{r}")
    }
}

/// Cry: outer_tears or inner_tears
pub fn cry<R: Rng + ?Sized>(p: &Parts, rng: &mut R) -> String {
    let (l, r) = pick_wrap(rng);
    if rng.gen_bool(0.5) {
        let outer = p.pick(Slot::Outer, rng);
        let el = p.pick(Slot::Eyes, rng);
        let er = p.pick(Slot::Eyes, rng);
        let m = p.pick(Slot::Mouth, rng);
        let tl = p.pick(Slot::Tear, rng);
        let tr = p.pick(Slot::Tear, rng);
        format!("{outer}{l}{tl}{el}{m}{er}{tr}{r}{outer}")
    } else {
        let m = p.pick(Slot::Mouth, rng);
        format!("{l} ´•̥{m}•̥ {r}")
    }
}

pub fn happy<R: Rng + ?Sized>(p: &Parts, rng: &mut R) -> String {
    let (l, r) = pick_wrap(rng);
    let e = p.pick(Slot::Eyes, rng);
    let m = p.pick(Slot::Mouth, rng);
    let dec = optional_decor(p, rng);
    format!("{l}{e}{m}{e}{r}{dec}")
}

pub fn angry<R: Rng + ?Sized>(p: &Parts, rng: &mut R) -> String {
    let (l, r) = pick_wrap(rng);
    let v = p.pick(Slot::Vein, rng);
    let e = p.pick(Slot::Eyes, rng);
    let m = p.pick(Slot::Mouth, rng);
    let d = p.pick(Slot::Decor, rng);
    format!("{v}{l}{e}{m}{e}{r}{d}")
}

pub fn sleepy<R: Rng + ?Sized>(p: &Parts, rng: &mut R) -> String {
    let (l, r) = pick_wrap(rng);
    let e = p.pick(Slot::Eyes, rng);
    let m = p.pick(Slot::Mouth, rng);
    let bub = p.pick(Slot::Bubble, rng);
    format!("{l}{e}{m}{e}{r} {bub}")
}

/// Generate one face for a category with the given styles
///
/// `Misc` has no template and falls back to happy.
pub fn generate_face<R: Rng + ?Sized>(category: Category, styles: &[Style], rng: &mut R) -> String {
    let category = if category.is_generated() {
        category
    } else {
        Category::Happy
    };
    let parts = bias(&Parts::for_category(category), styles);

    match category {
        Category::Cat => cat(&parts, rng),
        Category::Dog => dog(&parts, rng),
        Category::Cry => cry(&parts, rng),
        Category::Angry => angry(&parts, rng),
        Category::Sleepy => sleepy(&parts, rng),
        Category::Happy | Category::Misc => happy(&parts, rng),
    }
}
