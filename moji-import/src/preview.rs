//! Category preview of freshly fetched candidates
//!
//! Lets an operator see how the heuristic classifier would file a set of
//! sources before merging anything into the corpus.

use crate::extract::extract_faces;
use crate::fetch::Fetcher;
use moji_common::face::{categorize, is_valid_face};
use moji_common::Category;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPreview {
    pub category: Category,
    pub count: usize,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Distinct candidates considered
    pub total: usize,
    pub items: Vec<CategoryPreview>,
}

/// Fetch every source and collect its extracted faces; failures are skipped
pub async fn collect_candidates(sources: &[String], fetcher: &Fetcher) -> Vec<String> {
    let mut faces = Vec::new();
    for url in sources {
        match fetcher.fetch(url).await {
            Ok(text) => faces.extend(extract_faces(&text)),
            Err(e) => warn!(url = %url, error = %e, "Skipping source"),
        }
    }
    faces
}

/// Group candidates by category, keeping the first `limit` of each as examples
pub fn preview(faces: &[String], limit: usize, filter_bad: bool) -> Preview {
    let mut seen = HashSet::new();
    let candidates: Vec<&str> = faces
        .iter()
        .map(String::as_str)
        .filter(|f| seen.insert(*f))
        .filter(|f| !filter_bad || is_valid_face(f))
        .collect();

    let mut groups: BTreeMap<Category, Vec<&str>> = BTreeMap::new();
    for face in &candidates {
        groups.entry(categorize(face)).or_default().push(face);
    }

    let items = Category::ALL
        .iter()
        .filter_map(|cat| {
            let group = groups.get(cat)?;
            Some(CategoryPreview {
                category: *cat,
                count: group.len(),
                examples: group.iter().take(limit).map(|f| f.to_string()).collect(),
            })
        })
        .collect();

    Preview {
        total: candidates.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_preview_groups_in_category_order() {
        let candidates = faces(&["(^_^)", "(T_T)", "(^_^)", "(ಥ﹏ಥ)", "(^o^)"]);
        let result = preview(&candidates, 1, false);

        assert_eq!(result.total, 4);
        let categories: Vec<Category> = result.items.iter().map(|i| i.category).collect();
        assert_eq!(categories, vec![Category::Cry, Category::Happy, Category::Misc]);

        let cry = &result.items[0];
        assert_eq!(cry.count, 2);
        assert_eq!(cry.examples, vec!["(T_T)"]);
    }

    #[test]
    fn test_preview_filter_bad() {
        let candidates = faces(&["(^_^)", "<li>(^_^)</li>", "Loading (T_T)"]);

        assert_eq!(preview(&candidates, 10, false).total, 3);

        let filtered = preview(&candidates, 10, true);
        assert_eq!(filtered.total, 1);
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].category, Category::Happy);
    }
}
