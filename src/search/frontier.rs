//! Best-first traversal shared by both strategies
//!
//! A priority-queue relaxation over non-negative edge weights. With a zero
//! estimate this is Dijkstra; with a consistent estimate it is A*. All state
//! is local to one call.

use super::budget::SearchBudget;
use super::path::{Path, PathResult, SearchReport};
use crate::error::{NodeNotFound, SearchError, ValidationError};
use crate::graph::{NodeId, WordGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Frontier entry, ordered by estimated total cost
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    node: NodeId,
    cost: f64,
    priority: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            // Deeper entries first among equal estimates
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Check query words and map them to node ids
///
/// Empty words are rejected before absent ones.
pub(crate) fn resolve_endpoints(
    graph: &WordGraph,
    start: &str,
    goal: &str,
) -> Result<(NodeId, NodeId), SearchError> {
    if start.trim().is_empty() {
        return Err(ValidationError::EmptyQuery { role: "start" }.into());
    }
    if goal.trim().is_empty() {
        return Err(ValidationError::EmptyQuery { role: "goal" }.into());
    }

    let lookup = |word: &str, role: &'static str| {
        let normalized = word.trim().to_lowercase();
        graph
            .node_id(&normalized)
            .ok_or_else(|| SearchError::NodeNotFound {
                role,
                source: NodeNotFound::new(word),
            })
    };

    Ok((lookup(start, "start")?, lookup(goal, "goal")?))
}

/// Run the traversal from `start` to `goal`
///
/// `estimate` must not overestimate the remaining cost from a node to the goal
/// and must change by no more than the edge weight across any edge.
pub(crate) fn best_first<H>(
    graph: &WordGraph,
    start: NodeId,
    goal: NodeId,
    budget: &SearchBudget,
    estimate: H,
) -> Result<SearchReport, SearchError>
where
    H: Fn(NodeId) -> f64,
{
    if start == goal {
        return Ok(SearchReport {
            outcome: PathResult::Found(Path::new(vec![graph.word_at(start).clone()], 0.0)),
            expanded: 0,
        });
    }

    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<NodeId>> = vec![None; n];
    let mut closed = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut expanded = 0;

    distance[start] = 0.0;
    heap.push(Reverse(HeapEntry {
        node: start,
        cost: 0.0,
        priority: estimate(start),
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        if closed[entry.node] {
            continue;
        }
        if budget.is_exhausted(expanded) {
            tracing::debug!(expanded, "search budget exhausted");
            return Ok(SearchReport {
                outcome: PathResult::Cancelled,
                expanded,
            });
        }

        closed[entry.node] = true;
        expanded += 1;
        tracing::trace!(word = %graph.word_at(entry.node), cost = entry.cost, "expand");

        if entry.node == goal {
            let path = reconstruct(graph, &previous, start, goal, distance[goal])?;
            return Ok(SearchReport {
                outcome: PathResult::Found(path),
                expanded,
            });
        }

        for &(neighbor, weight) in graph.neighbor_ids(entry.node) {
            if closed[neighbor] {
                continue;
            }
            let cost = entry.cost + weight;
            if cost < distance[neighbor] {
                distance[neighbor] = cost;
                previous[neighbor] = Some(entry.node);
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    cost,
                    priority: cost + estimate(neighbor),
                }));
            }
        }
    }

    Ok(SearchReport {
        outcome: PathResult::NoPath,
        expanded,
    })
}

/// Walk predecessor links back from the goal
fn reconstruct(
    graph: &WordGraph,
    previous: &[Option<NodeId>],
    start: NodeId,
    goal: NodeId,
    total_weight: f64,
) -> Result<Path, SearchError> {
    let mut ids = vec![goal];
    let mut current = goal;

    while current != start {
        current = previous[current].ok_or_else(|| {
            SearchError::Corrupted(format!(
                "no predecessor recorded for '{}'",
                graph.word_at(current)
            ))
        })?;
        if ids.len() > graph.node_count() {
            return Err(SearchError::Corrupted(
                "predecessor chain contains a cycle".to_string(),
            ));
        }
        ids.push(current);
    }

    ids.reverse();
    let words = ids.into_iter().map(|id| graph.word_at(id).clone()).collect();
    Ok(Path::new(words, total_weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordGraphBuilder;

    fn graph() -> WordGraph {
        WordGraphBuilder::default()
            .build_from_counts([("cat", 5), ("cot", 3), ("cog", 2), ("dog", 4), ("xyz", 1)])
            .unwrap()
    }

    #[test]
    fn heap_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        for (node, priority) in [(0, 3.0), (1, 1.0), (2, 2.0)] {
            heap.push(Reverse(HeapEntry {
                node,
                cost: 0.0,
                priority,
            }));
        }
        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
        assert_eq!(order, [1, 2, 0]);
    }

    #[test]
    fn resolve_rejects_empty_before_missing() {
        let graph = graph();
        assert!(matches!(
            resolve_endpoints(&graph, "", "zzz"),
            Err(SearchError::Validation(ValidationError::EmptyQuery { role: "start" }))
        ));
        assert!(matches!(
            resolve_endpoints(&graph, "cat", " "),
            Err(SearchError::Validation(ValidationError::EmptyQuery { role: "goal" }))
        ));
    }

    #[test]
    fn resolve_reports_missing_role() {
        let graph = graph();
        assert!(matches!(
            resolve_endpoints(&graph, "zzz", "cat"),
            Err(SearchError::NodeNotFound { role: "start", .. })
        ));
        assert!(matches!(
            resolve_endpoints(&graph, "cat", "zzz"),
            Err(SearchError::NodeNotFound { role: "goal", .. })
        ));
    }

    #[test]
    fn resolve_normalizes_case() {
        let graph = graph();
        assert!(resolve_endpoints(&graph, "CAT", " Dog ").is_ok());
    }

    #[test]
    fn zero_estimate_finds_cheapest_path() {
        let graph = graph();
        let (start, goal) = resolve_endpoints(&graph, "cat", "dog").unwrap();
        let report = best_first(&graph, start, goal, &SearchBudget::unlimited(), |_| 0.0).unwrap();

        let path = report.outcome.into_path().unwrap();
        assert_eq!(path.texts(), ["cat", "cot", "cog", "dog"]);
        assert_eq!(path.total_weight(), 4.0 + 2.5 + 3.0);
        assert_eq!(report.expanded, 4);
    }

    #[test]
    fn exhausted_budget_cancels() {
        let graph = graph();
        let (start, goal) = resolve_endpoints(&graph, "cat", "dog").unwrap();
        let budget = SearchBudget::unlimited().with_max_expansions(2);
        let report = best_first(&graph, start, goal, &budget, |_| 0.0).unwrap();

        assert_eq!(report.outcome, PathResult::Cancelled);
        assert_eq!(report.expanded, 2);
    }

    #[test]
    fn same_endpoint_ignores_budget() {
        let graph = graph();
        let (start, goal) = resolve_endpoints(&graph, "cat", "cat").unwrap();
        let budget = SearchBudget::unlimited().with_max_expansions(0);
        let report = best_first(&graph, start, goal, &budget, |_| 0.0).unwrap();

        assert_eq!(report.outcome.path().unwrap().texts(), ["cat"]);
    }

    #[test]
    fn disconnected_goal_is_no_path() {
        let graph = graph();
        let (start, goal) = resolve_endpoints(&graph, "cat", "xyz").unwrap();
        let report = best_first(&graph, start, goal, &SearchBudget::unlimited(), |_| 0.0).unwrap();

        assert_eq!(report.outcome, PathResult::NoPath);
        assert_eq!(report.expanded, 4);
    }
}
