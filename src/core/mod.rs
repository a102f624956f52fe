//! Core domain types for word ladders
//!
//! Validated words and the fixed-length vocabulary a graph is built from.

mod vocabulary;
mod word;

pub use vocabulary::Vocabulary;
pub use word::{Word, WordError};
