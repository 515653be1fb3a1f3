//! Source list loading
//!
//! One URL per line; blank lines and `#` comments are skipped.

use moji_common::Result;
use std::path::Path;
use tracing::debug;

/// Parse source list content
pub fn parse_sources(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read the source list; a missing file is an empty list
pub fn load_sources(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        debug!(path = %path.display(), "Source list not found");
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_sources(&content))
}
