//! Face extraction from fetched text
//!
//! JSON documents are read structurally; everything else is scanned line by
//! line, with an extra pass over `<code>` and `<li>` element content for
//! HTML pages.

use moji_common::face::is_face_like;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

static CODE_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<code(?:\s[^>]*)?>(.*?)</code\s*>").expect("code element pattern is valid")
});

static LI_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<li(?:\s[^>]*)?>(.*?)</li\s*>").expect("li element pattern is valid")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<.*?>").expect("tag pattern is valid"));

/// First-seen ordered set
#[derive(Default)]
struct Collected {
    faces: Vec<String>,
    seen: HashSet<String>,
}

impl Collected {
    fn add(&mut self, candidate: &str) {
        if is_face_like(candidate) && self.seen.insert(candidate.to_string()) {
            self.faces.push(candidate.to_string());
        }
    }
}

fn list_strings(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(Value::as_str).map(str::trim).collect()
}

/// Trimmed strings of a JSON list, or of the list values of a JSON object
fn json_strings(value: &Value) -> Vec<&str> {
    match value {
        Value::Array(items) => list_strings(items),
        Value::Object(map) => map
            .values()
            .filter_map(Value::as_array)
            .flat_map(|items| list_strings(items))
            .collect(),
        _ => Vec::new(),
    }
}

/// Extract face-like candidates, deduplicated in first-seen order
pub fn extract_faces(text: &str) -> Vec<String> {
    let mut collected = Collected::default();

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        let strings = json_strings(&value);
        if !strings.is_empty() {
            for s in strings {
                collected.add(s);
            }
            return collected.faces;
        }
    }

    for line in text.lines() {
        collected.add(line.trim());
    }

    for element in [&*CODE_ELEMENT, &*LI_ELEMENT] {
        for caps in element.captures_iter(text) {
            let inner = TAG.replace_all(&caps[1], "");
            collected.add(inner.trim());
        }
    }

    collected.faces
}
