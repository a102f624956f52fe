//! Uninformed weighted search (Dijkstra)

use super::budget::SearchBudget;
use super::frontier::{best_first, resolve_endpoints};
use super::path::SearchReport;
use super::strategy::SearchStrategy;
use crate::error::SearchError;
use crate::graph::WordGraph;

/// Dijkstra's algorithm over edge weights
///
/// Returns a minimum-weight path; which one among equal-weight ties is
/// unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UninformedSearch;

impl SearchStrategy for UninformedSearch {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    #[tracing::instrument(skip(self, graph, budget), fields(algorithm = "dijkstra"))]
    fn search_with_report(
        &self,
        graph: &WordGraph,
        start: &str,
        goal: &str,
        budget: &SearchBudget,
    ) -> Result<SearchReport, SearchError> {
        let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;
        let report = best_first(graph, start_id, goal_id, budget, |_| 0.0)?;

        tracing::debug!(expanded = report.expanded, found = report.outcome.is_found(), "search finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordGraphBuilder;
    use crate::search::PathResult;

    #[test]
    fn prefers_lighter_detour() {
        // cat-bat-bag-bog-dog avoids the heavy cot
        let graph = WordGraphBuilder::default()
            .build_from_counts([
                ("cat", 1),
                ("cot", 100),
                ("cog", 1),
                ("dog", 1),
                ("bat", 1),
                ("bag", 1),
                ("bog", 1),
            ])
            .unwrap();
        let path = UninformedSearch
            .search(&graph, "cat", "dog")
            .unwrap()
            .into_path()
            .unwrap();

        assert_eq!(path.texts(), ["cat", "bat", "bag", "bog", "dog"]);
        assert_eq!(path.total_weight(), 4.0);
    }

    #[test]
    fn disconnected_words_have_no_path() {
        let graph = WordGraphBuilder::default()
            .build_from_counts([("cat", 1), ("xyz", 1)])
            .unwrap();
        assert_eq!(
            UninformedSearch.search(&graph, "cat", "xyz").unwrap(),
            PathResult::NoPath
        );
    }

    #[test]
    fn absent_goal_is_node_not_found() {
        let graph = WordGraphBuilder::default()
            .build_from_counts([("cat", 1)])
            .unwrap();
        let err = UninformedSearch.search(&graph, "cat", "dog").unwrap_err();
        assert!(matches!(err, SearchError::NodeNotFound { role: "goal", .. }));
    }
}
