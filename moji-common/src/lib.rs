//! # Moji Common Library
//!
//! Shared code for the moji crates including:
//! - Error types
//! - Layered configuration loading
//! - Face categories and the heuristic categorizer
//! - Face validity filters used by import and cleaning
//! - The flat JSON sample corpus

pub mod category;
pub mod config;
pub mod corpus;
pub mod error;
pub mod face;

pub use category::Category;
pub use corpus::SampleCorpus;
pub use error::{Error, Result};
