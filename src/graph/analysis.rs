//! Structural summaries of a built graph

use super::builder::pattern_buckets;
use super::word_graph::WordGraph;
use crate::core::Word;
use std::collections::VecDeque;

/// Partition the graph into connected components
///
/// Components are ordered by size, largest first. Words within a component
/// follow node order.
#[must_use]
pub fn connected_components(graph: &WordGraph) -> Vec<Vec<&Word>> {
    let mut component_of = vec![usize::MAX; graph.node_count()];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for root in 0..graph.node_count() {
        if component_of[root] != usize::MAX {
            continue;
        }
        let label = components.len();
        let mut members = Vec::new();
        let mut queue = VecDeque::from([root]);
        component_of[root] = label;

        while let Some(id) = queue.pop_front() {
            members.push(id);
            for &(neighbor, _) in graph.neighbor_ids(id) {
                if component_of[neighbor] == usize::MAX {
                    component_of[neighbor] = label;
                    queue.push_back(neighbor);
                }
            }
        }

        members.sort_unstable();
        components.push(members);
    }

    components.sort_by_key(|members| std::cmp::Reverse(members.len()));
    components
        .into_iter()
        .map(|members| members.into_iter().map(|id| graph.word_at(id)).collect())
        .collect()
}

/// Size of the component containing `word`, `None` if the word is absent
#[must_use]
pub fn component_size(graph: &WordGraph, word: &str) -> Option<usize> {
    graph.node_id(word)?;
    connected_components(graph)
        .into_iter()
        .find(|members| members.iter().any(|w| w.text() == word))
        .map(|members| members.len())
}

/// Summary statistics for a graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub word_length: Option<usize>,
    /// Pattern buckets holding at least two words
    pub linked_buckets: usize,
    pub largest_bucket: usize,
    pub components: usize,
    pub largest_component: usize,
    pub isolated_words: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    pub min_edge_weight: Option<f64>,
    pub max_edge_weight: Option<f64>,
}

impl GraphStats {
    #[must_use]
    pub fn compute(graph: &WordGraph) -> Self {
        let buckets = pattern_buckets(graph.words());
        let linked: Vec<usize> = buckets
            .iter()
            .map(Vec::len)
            .filter(|&len| len > 1)
            .collect();

        let components = connected_components(graph);
        let degrees: Vec<usize> = graph
            .words()
            .map(|w| graph.degree(w.text()).unwrap_or(0))
            .collect();

        let mean_degree = if degrees.is_empty() {
            0.0
        } else {
            degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
        };

        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            word_length: graph.word_length(),
            linked_buckets: linked.len(),
            largest_bucket: linked.iter().copied().max().unwrap_or(0),
            components: components.len(),
            largest_component: components.first().map_or(0, Vec::len),
            isolated_words: degrees.iter().filter(|&&d| d == 0).count(),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            mean_degree,
            min_edge_weight: graph.min_edge_weight(),
            max_edge_weight: graph.edges().map(|e| e.weight).reduce(f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordGraphBuilder;

    fn build(counts: &[(&str, u64)]) -> WordGraph {
        WordGraphBuilder::default()
            .build_from_counts(counts.iter().copied())
            .unwrap()
    }

    #[test]
    fn components_split_disconnected_words() {
        let graph = build(&[("cat", 1), ("cot", 1), ("cog", 1), ("xyz", 1)]);
        let components = connected_components(&graph);

        assert_eq!(components.len(), 2);
        let largest: Vec<&str> = components[0].iter().map(|w| w.text()).collect();
        assert_eq!(largest, ["cat", "cot", "cog"]);
        assert_eq!(components[1][0].text(), "xyz");
    }

    #[test]
    fn component_size_lookup() {
        let graph = build(&[("cat", 1), ("cot", 1), ("xyz", 1)]);
        assert_eq!(component_size(&graph, "cat"), Some(2));
        assert_eq!(component_size(&graph, "xyz"), Some(1));
        assert_eq!(component_size(&graph, "zzz"), None);
    }

    #[test]
    fn stats_for_known_ladder() {
        let graph = build(&[("cat", 5), ("cot", 3), ("cog", 2), ("dog", 4), ("xyz", 1)]);
        let stats = GraphStats::compute(&graph);

        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.word_length, Some(3));
        assert_eq!(stats.linked_buckets, 3);
        assert_eq!(stats.largest_bucket, 2);
        assert_eq!(stats.components, 2);
        assert_eq!(stats.largest_component, 4);
        assert_eq!(stats.isolated_words, 1);
        assert_eq!(stats.max_degree, 2);
        assert!((stats.mean_degree - 6.0 / 5.0).abs() < 1e-12);
        assert_eq!(stats.min_edge_weight, Some(2.5));
        assert_eq!(stats.max_edge_weight, Some(4.0));
    }

    #[test]
    fn stats_for_empty_graph() {
        let stats = GraphStats::compute(&WordGraph::default());
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.components, 0);
        assert_eq!(stats.largest_component, 0);
        assert_eq!(stats.mean_degree, 0.0);
        assert_eq!(stats.max_edge_weight, None);
    }
}
