//! Hamming-guided weighted search (A*)
//!
//! Every edge changes one letter, so the Hamming distance to the goal is a
//! lower bound on the number of remaining edges. Turning that into a bound on
//! weighted cost needs a per-edge minimum, which `HeuristicMode` makes explicit.

use super::budget::SearchBudget;
use super::frontier::{best_first, resolve_endpoints};
use super::path::SearchReport;
use super::strategy::SearchStrategy;
use crate::error::{SearchError, ValidationError};
use crate::graph::WordGraph;
use std::fmt;
use std::str::FromStr;

/// Number of positions at which two equal-length words differ
///
/// # Errors
/// Returns `ValidationError::LengthMismatch` when the lengths differ.
///
/// # Examples
/// ```
/// use word_ladder::search::hamming_distance;
///
/// assert_eq!(hamming_distance("cat", "dog").unwrap(), 3);
/// assert_eq!(hamming_distance("cat", "cot").unwrap(), 1);
/// assert!(hamming_distance("cat", "cats").is_err());
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize, ValidationError> {
    if a.len() != b.len() {
        return Err(ValidationError::LengthMismatch {
            word: b.to_string(),
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(differing_positions(a.as_bytes(), b.as_bytes()))
}

#[inline]
fn differing_positions(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// How the Hamming distance is turned into a cost estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeuristicMode {
    /// Hamming distance times the graph's smallest edge weight.
    /// Admissible for any non-negative weights.
    #[default]
    Scaled,
    /// Raw Hamming distance, one unit per differing letter.
    /// Admissible only while every edge weight is at least 1; the built graph
    /// guarantees that because every count is at least 1.
    Hamming,
}

impl HeuristicMode {
    /// Multiplier applied to the Hamming distance on `graph`
    #[must_use]
    pub fn scale(self, graph: &WordGraph) -> f64 {
        match self {
            Self::Scaled => graph.min_edge_weight().unwrap_or(0.0),
            Self::Hamming => 1.0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scaled => "scaled",
            Self::Hamming => "hamming",
        }
    }
}

impl fmt::Display for HeuristicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scaled" | "min-weight" => Ok(Self::Scaled),
            "hamming" | "raw" => Ok(Self::Hamming),
            other => Err(format!(
                "Invalid heuristic mode: {other} (expected scaled or hamming)"
            )),
        }
    }
}

/// A* search guided by Hamming distance to the goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicSearch {
    pub mode: HeuristicMode,
}

impl HeuristicSearch {
    #[must_use]
    pub const fn new(mode: HeuristicMode) -> Self {
        Self { mode }
    }
}

impl SearchStrategy for HeuristicSearch {
    fn name(&self) -> &'static str {
        "astar"
    }

    #[tracing::instrument(skip(self, graph, budget), fields(algorithm = "astar", mode = %self.mode))]
    fn search_with_report(
        &self,
        graph: &WordGraph,
        start: &str,
        goal: &str,
        budget: &SearchBudget,
    ) -> Result<SearchReport, SearchError> {
        let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;
        let goal_chars = graph.word_at(goal_id).chars();
        let scale = self.mode.scale(graph);

        let report = best_first(graph, start_id, goal_id, budget, |id| {
            differing_positions(graph.word_at(id).chars(), goal_chars) as f64 * scale
        })?;

        tracing::debug!(expanded = report.expanded, found = report.outcome.is_found(), "search finished");
        Ok(report)
    }
}
