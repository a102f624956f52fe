//! Shortest-path strategies
//!
//! Defines the `SearchStrategy` trait and the closed set of algorithms.

use super::budget::SearchBudget;
use super::heuristic::{HeuristicMode, HeuristicSearch};
use super::path::{PathResult, SearchReport};
use super::uninformed::UninformedSearch;
use crate::error::SearchError;
use crate::graph::WordGraph;
use std::fmt;
use std::str::FromStr;

/// A strategy for finding a word ladder between two words
///
/// Implementations hold no per-search state, so one instance can serve any
/// number of searches over any number of graphs, concurrently.
pub trait SearchStrategy {
    /// Short identifier used in logs and output
    fn name(&self) -> &'static str;

    /// Search within `budget`, reporting how many nodes were expanded
    ///
    /// # Errors
    /// Returns `SearchError` if either word is empty or not in the graph.
    /// No path and budget exhaustion are outcomes, not errors.
    fn search_with_report(
        &self,
        graph: &WordGraph,
        start: &str,
        goal: &str,
        budget: &SearchBudget,
    ) -> Result<SearchReport, SearchError>;

    /// Search within `budget`
    ///
    /// # Errors
    /// See [`SearchStrategy::search_with_report`].
    fn search_within(
        &self,
        graph: &WordGraph,
        start: &str,
        goal: &str,
        budget: &SearchBudget,
    ) -> Result<PathResult, SearchError> {
        Ok(self.search_with_report(graph, start, goal, budget)?.outcome)
    }

    /// Search without limits
    ///
    /// # Errors
    /// See [`SearchStrategy::search_with_report`].
    fn search(&self, graph: &WordGraph, start: &str, goal: &str) -> Result<PathResult, SearchError> {
        self.search_within(graph, start, goal, &SearchBudget::unlimited())
    }
}

/// Enum wrapper for the supported algorithms
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    /// Dijkstra over edge weights
    Uninformed(UninformedSearch),
    /// A* guided by Hamming distance
    Heuristic(HeuristicSearch),
}

impl Default for SearchAlgorithm {
    fn default() -> Self {
        Self::Uninformed(UninformedSearch)
    }
}

impl SearchAlgorithm {
    /// A* with the given heuristic mode
    #[must_use]
    pub const fn heuristic(mode: HeuristicMode) -> Self {
        Self::Heuristic(HeuristicSearch::new(mode))
    }

    /// Replace the heuristic mode; no effect on `Uninformed`
    #[must_use]
    pub const fn with_heuristic_mode(self, mode: HeuristicMode) -> Self {
        match self {
            Self::Uninformed(_) => self,
            Self::Heuristic(_) => Self::heuristic(mode),
        }
    }

    /// Both algorithms, for comparisons
    #[must_use]
    pub const fn all(mode: HeuristicMode) -> [Self; 2] {
        [Self::Uninformed(UninformedSearch), Self::heuristic(mode)]
    }
}

impl SearchStrategy for SearchAlgorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::Uninformed(s) => s.name(),
            Self::Heuristic(s) => s.name(),
        }
    }

    fn search_with_report(
        &self,
        graph: &WordGraph,
        start: &str,
        goal: &str,
        budget: &SearchBudget,
    ) -> Result<SearchReport, SearchError> {
        match self {
            Self::Uninformed(s) => s.search_with_report(graph, start, goal, budget),
            Self::Heuristic(s) => s.search_with_report(graph, start, goal, budget),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = SearchError;

    /// Parse an algorithm name
    ///
    /// Accepts "dijkstra"/"uninformed" and "astar"/"a*"/"heuristic".
    /// Anything else is `SearchError::UnsupportedAlgorithm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "uninformed" => Ok(Self::Uninformed(UninformedSearch)),
            "astar" | "a*" | "a-star" | "heuristic" => {
                Ok(Self::Heuristic(HeuristicSearch::default()))
            }
            _ => Err(SearchError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
