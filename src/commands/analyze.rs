//! Word analysis command
//!
//! Reports a word's count, its one-letter neighbors and the size of its
//! component.

use crate::error::NodeNotFound;
use crate::graph::{WordGraph, component_size};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub count: u64,
    /// Neighbors sorted by ascending edge weight, then alphabetically
    pub neighbors: Vec<(String, f64)>,
    pub component_size: usize,
    pub total_words: usize,
}

/// Analyze a word's position in the graph
///
/// # Errors
///
/// Returns `NodeNotFound` if the word is not in the graph.
pub fn analyze_word(graph: &WordGraph, word: &str) -> Result<AnalysisResult, NodeNotFound> {
    let normalized = word.trim().to_lowercase();
    let count = graph.count(&normalized)?;

    let mut neighbors: Vec<(String, f64)> = graph
        .neighbors(&normalized)?
        .map(|(neighbor, weight)| (neighbor.text().to_string(), weight))
        .collect();
    neighbors.sort_by(|(a, wa), (b, wb)| wa.total_cmp(wb).then_with(|| a.cmp(b)));

    let component_size = component_size(graph, &normalized).unwrap_or(1);

    Ok(AnalysisResult {
        word: normalized,
        count,
        neighbors,
        component_size,
        total_words: graph.node_count(),
    })
}
