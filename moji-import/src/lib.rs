//! moji-import library - sample corpus tooling
//!
//! Fetches public kaomoji lists, extracts face-like strings, classifies them
//! heuristically and merges them into the flat JSON corpus. Also hosts the
//! cleaning pass and the category preview used by moji-web.

pub mod clean;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod preview;
pub mod sources;

pub use clean::{clean, CleanReport};
pub use extract::extract_faces;
pub use fetch::Fetcher;
pub use pipeline::{import, import_texts, ImportOptions, ImportReport, Merger};
pub use preview::{collect_candidates, preview, CategoryPreview, Preview};
pub use sources::load_sources;
