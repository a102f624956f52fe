//! Word ladder command
//!
//! Finds a ladder between two words and records how the search went.

use crate::error::SearchError;
use crate::graph::WordGraph;
use crate::search::{PathResult, SearchBudget, SearchStrategy};
use std::time::{Duration, Instant};

/// Configuration for one ladder search
#[derive(Debug, Clone)]
pub struct LadderConfig {
    pub start: String,
    pub goal: String,
    pub budget: SearchBudget,
}

impl LadderConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            budget: SearchBudget::unlimited(),
        }
    }

    #[must_use]
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }
}

/// Result of a ladder search
#[derive(Debug, Clone)]
pub struct LadderResult {
    pub start: String,
    pub goal: String,
    pub algorithm: &'static str,
    pub outcome: PathResult,
    pub expanded: usize,
    pub duration: Duration,
}

/// Search for a ladder using the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty
/// - Either word is not in the graph
pub fn find_ladder<S: SearchStrategy>(
    graph: &WordGraph,
    strategy: &S,
    config: LadderConfig,
) -> Result<LadderResult, SearchError> {
    let started = Instant::now();
    let report = strategy.search_with_report(graph, &config.start, &config.goal, &config.budget)?;

    Ok(LadderResult {
        start: config.start,
        goal: config.goal,
        algorithm: strategy.name(),
        outcome: report.outcome,
        expanded: report.expanded,
        duration: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordGraphBuilder;
    use crate::search::{HeuristicMode, SearchAlgorithm};
    use crate::wordlists::loader::sample_counts;

    fn sample_graph() -> WordGraph {
        WordGraphBuilder::default()
            .build_from_counts(sample_counts())
            .unwrap()
    }

    #[test]
    fn ladder_on_sample_vocabulary() {
        let graph = sample_graph();
        for algorithm in SearchAlgorithm::all(HeuristicMode::default()) {
            let result = find_ladder(&graph, &algorithm, LadderConfig::new("cat", "dog")).unwrap();

            assert_eq!(result.algorithm, algorithm.name());
            let path = result.outcome.path().unwrap();
            assert_eq!(path.start().text(), "cat");
            assert_eq!(path.goal().text(), "dog");
            assert!(path.hops() >= 3);
            assert!(result.expanded >= path.words().len());
        }
    }

    #[test]
    fn ladder_algorithms_agree_on_sample_weight() {
        let graph = sample_graph();
        let weights: Vec<f64> = SearchAlgorithm::all(HeuristicMode::default())
            .iter()
            .map(|algorithm| {
                find_ladder(&graph, algorithm, LadderConfig::new("cat", "dog"))
                    .unwrap()
                    .outcome
                    .path()
                    .unwrap()
                    .total_weight()
            })
            .collect();
        assert!((weights[0] - weights[1]).abs() < 1e-9);
    }

    #[test]
    fn ladder_respects_budget() {
        let graph = sample_graph();
        let config =
            LadderConfig::new("cat", "dog").with_budget(SearchBudget::unlimited().with_max_expansions(1));
        let result = find_ladder(&graph, &SearchAlgorithm::default(), config).unwrap();

        assert_eq!(result.outcome, PathResult::Cancelled);
        assert_eq!(result.expanded, 1);
    }

    #[test]
    fn ladder_unknown_word_is_error() {
        let graph = sample_graph();
        let err = find_ladder(&graph, &SearchAlgorithm::default(), LadderConfig::new("qqq", "dog"))
            .unwrap_err();
        assert!(matches!(err, SearchError::NodeNotFound { role: "start", .. }));
    }
}
