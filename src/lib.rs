//! Word Ladder
//!
//! Builds a graph over a fixed-length vocabulary, joining words that differ
//! by one letter, and finds minimum-weight ladders between two words with
//! Dijkstra or Hamming-guided A*.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Vocabulary;
//! use word_ladder::graph::WordGraphBuilder;
//! use word_ladder::search::{SearchAlgorithm, SearchStrategy};
//!
//! let vocabulary = Vocabulary::new([("cat", 5), ("cot", 3), ("cog", 2), ("dog", 4)]).unwrap();
//! let graph = WordGraphBuilder::default().build(&vocabulary);
//!
//! let algorithm: SearchAlgorithm = "astar".parse().unwrap();
//! let path = algorithm.search(&graph, "cat", "dog").unwrap().into_path().unwrap();
//!
//! assert_eq!(path.texts(), ["cat", "cot", "cog", "dog"]);
//! assert_eq!(path.total_weight(), 9.5);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Graph construction
pub mod graph;

// Shortest-path strategies
pub mod search;

// Word counts
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;

pub use error::{Error, Result};
