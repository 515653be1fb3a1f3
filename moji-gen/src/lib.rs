//! moji-gen library - keyword driven kaomoji generation
//!
//! Data flows one way:
//! keywords → category/style extraction → (sample pool ∪ template pool)
//! → deduplicated truncated list → optional scoring

pub mod bias;
pub mod explore;
pub mod generate;
pub mod keywords;
pub mod mutate;
pub mod parts;
pub mod score;
pub mod template;

pub use generate::{generate, generate_from_path, GenerateRequest, Generation};
pub use keywords::{Lang, Style};
pub use score::{rank, score, Scored, Scorer};
