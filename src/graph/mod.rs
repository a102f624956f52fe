//! Word graph construction and queries
//!
//! `WordGraphBuilder` turns a `Vocabulary` into an immutable `WordGraph`
//! whose edges join words that differ in exactly one position.

pub mod analysis;
mod builder;
mod word_graph;

pub use analysis::{GraphStats, component_size, connected_components};
pub use builder::{BuildConfig, WILDCARD, WordGraphBuilder, mean_weight, pattern_buckets, pattern_key};
pub use word_graph::{EdgeRef, WordGraph};
pub(crate) use word_graph::NodeId;
