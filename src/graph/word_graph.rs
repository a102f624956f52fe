//! Immutable word graph
//!
//! Nodes are words with their counts, edges join words one letter apart.
//! Nodes are addressed internally by dense indices so search state can live in
//! plain vectors owned by each call.

use crate::core::Word;
use crate::error::NodeNotFound;
use rustc_hash::FxHashMap;

/// Dense node index, valid only for the graph that issued it
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    word: Word,
    count: u64,
}

/// A borrowed view of one undirected edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a> {
    pub source: &'a Word,
    pub target: &'a Word,
    pub weight: f64,
}

/// Undirected weighted graph over a fixed-length vocabulary
///
/// Built once by `WordGraphBuilder` and never mutated afterwards, so a shared
/// reference can be searched from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    word_length: Option<usize>,
    nodes: Vec<Node>,
    index: FxHashMap<Word, NodeId>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
    edges: Vec<(NodeId, NodeId, f64)>,
    min_edge_weight: Option<f64>,
}

impl WordGraph {
    /// Assemble a graph from nodes and a list of unique undirected edges
    pub(crate) fn from_parts(
        word_length: Option<usize>,
        nodes: Vec<(Word, u64)>,
        edges: Vec<(NodeId, NodeId, f64)>,
    ) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(nodes.len());
        let nodes: Vec<Node> = nodes
            .into_iter()
            .enumerate()
            .map(|(id, (word, count))| {
                index.insert(word.clone(), id);
                Node { word, count }
            })
            .collect();

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut min_edge_weight: Option<f64> = None;
        for &(a, b, weight) in &edges {
            debug_assert_ne!(a, b, "self-loop on {}", nodes[a].word);
            adjacency[a].push((b, weight));
            adjacency[b].push((a, weight));
            min_edge_weight = Some(min_edge_weight.map_or(weight, |m| m.min(weight)));
        }

        Self {
            word_length,
            nodes,
            index,
            adjacency,
            edges,
            min_edge_weight,
        }
    }

    /// Check whether a word is a node
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Occurrence count of a word
    ///
    /// # Errors
    /// Returns `NodeNotFound` if the word is not in the graph.
    pub fn count(&self, word: &str) -> Result<u64, NodeNotFound> {
        self.node_id(word)
            .map(|id| self.nodes[id].count)
            .ok_or_else(|| NodeNotFound::new(word))
    }

    /// Neighbors of a word with the weight of the connecting edge
    ///
    /// The order is fixed for a given build but carries no meaning.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if the word is not in the graph.
    pub fn neighbors(
        &self,
        word: &str,
    ) -> Result<impl ExactSizeIterator<Item = (&Word, f64)> + '_, NodeNotFound> {
        let id = self.node_id(word).ok_or_else(|| NodeNotFound::new(word))?;
        Ok(self.adjacency[id]
            .iter()
            .map(|&(neighbor, weight)| (&self.nodes[neighbor].word, weight)))
    }

    /// Number of neighbors, `None` if the word is absent
    #[must_use]
    pub fn degree(&self, word: &str) -> Option<usize> {
        self.node_id(word).map(|id| self.adjacency[id].len())
    }

    /// Weight of the edge between two words, if they are connected
    #[must_use]
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.node_id(a)?;
        let b = self.node_id(b)?;
        // Scan the shorter adjacency list
        let (from, to) = if self.adjacency[a].len() <= self.adjacency[b].len() {
            (a, b)
        } else {
            (b, a)
        };
        self.adjacency[from]
            .iter()
            .find(|&&(neighbor, _)| neighbor == to)
            .map(|&(_, weight)| weight)
    }

    /// All nodes with their counts
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (&Word, u64)> {
        self.nodes.iter().map(|node| (&node.word, node.count))
    }

    /// All words, in node order
    pub fn words(&self) -> impl ExactSizeIterator<Item = &Word> {
        self.nodes.iter().map(|node| &node.word)
    }

    /// Every undirected edge exactly once
    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeRef<'_>> {
        self.edges.iter().map(|&(a, b, weight)| EdgeRef {
            source: &self.nodes[a].word,
            target: &self.nodes[b].word,
            weight,
        })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length shared by every word, `None` for an empty graph
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    /// Smallest edge weight, `None` when there are no edges
    #[must_use]
    pub const fn min_edge_weight(&self) -> Option<f64> {
        self.min_edge_weight
    }

    pub(crate) fn node_id(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    pub(crate) fn word_at(&self, id: NodeId) -> &Word {
        &self.nodes[id].word
    }

    pub(crate) fn neighbor_ids(&self, id: NodeId) -> &[(NodeId, f64)] {
        &self.adjacency[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn small_graph() -> WordGraph {
        WordGraph::from_parts(
            Some(3),
            vec![(word("cat"), 5), (word("cot"), 3), (word("dog"), 4)],
            vec![(0, 1, 4.0)],
        )
    }

    #[test]
    fn graph_contains_and_count() {
        let graph = small_graph();
        assert!(graph.contains("cat"));
        assert!(!graph.contains("cog"));
        assert_eq!(graph.count("cot"), Ok(3));
        assert_eq!(graph.count("zzz"), Err(NodeNotFound::new("zzz")));
    }

    #[test]
    fn graph_neighbors_are_symmetric() {
        let graph = small_graph();
        let from_cat: Vec<(&str, f64)> = graph
            .neighbors("cat")
            .unwrap()
            .map(|(w, weight)| (w.text(), weight))
            .collect();
        let from_cot: Vec<(&str, f64)> = graph
            .neighbors("cot")
            .unwrap()
            .map(|(w, weight)| (w.text(), weight))
            .collect();

        assert_eq!(from_cat, [("cot", 4.0)]);
        assert_eq!(from_cot, [("cat", 4.0)]);
        assert_eq!(graph.neighbors("dog").unwrap().len(), 0);
        assert!(graph.neighbors("zzz").is_err());
    }

    #[test]
    fn graph_weight_lookup() {
        let graph = small_graph();
        assert_eq!(graph.weight("cat", "cot"), Some(4.0));
        assert_eq!(graph.weight("cot", "cat"), Some(4.0));
        assert_eq!(graph.weight("cat", "dog"), None);
        assert_eq!(graph.weight("cat", "zzz"), None);
    }

    #[test]
    fn graph_counts_and_min_weight() {
        let graph = small_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree("cat"), Some(1));
        assert_eq!(graph.degree("dog"), Some(0));
        assert_eq!(graph.min_edge_weight(), Some(4.0));
        assert_eq!(graph.word_length(), Some(3));
    }

    #[test]
    fn empty_graph() {
        let graph = WordGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.min_edge_weight(), None);
    }

    #[test]
    fn graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WordGraph>();
    }
}
