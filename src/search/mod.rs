//! Shortest-path search over word graphs
//!
//! Two strategies share one best-first engine: `UninformedSearch` (Dijkstra)
//! and `HeuristicSearch` (A* with a Hamming-distance estimate).
//! `SearchAlgorithm` selects between them by value.

mod budget;
mod frontier;
pub mod heuristic;
mod path;
pub mod strategy;
mod uninformed;

pub use budget::SearchBudget;
pub use heuristic::{HeuristicMode, HeuristicSearch, hamming_distance};
pub use path::{Path, PathResult, SearchReport};
pub use strategy::{SearchAlgorithm, SearchStrategy};
pub use uninformed::UninformedSearch;
