//! Benchmark command
//!
//! Runs every algorithm on the same random word pairs and checks that they
//! agree on ladder weight.

use crate::core::Word;
use crate::error::SearchError;
use crate::graph::WordGraph;
use crate::search::{PathResult, SearchAlgorithm, SearchBudget, SearchStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};

/// Weights closer than this count as equal
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Totals for one algorithm across all pairs
#[derive(Debug, Clone)]
pub struct AlgorithmTotals {
    pub algorithm: &'static str,
    pub found: usize,
    pub no_path: usize,
    pub cancelled: usize,
    pub expanded: usize,
    pub duration: Duration,
}

impl AlgorithmTotals {
    const fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            found: 0,
            no_path: 0,
            cancelled: 0,
            expanded: 0,
            duration: Duration::ZERO,
        }
    }

    /// Mean expansions per searched pair
    #[must_use]
    pub fn average_expanded(&self) -> f64 {
        let searches = self.found + self.no_path + self.cancelled;
        if searches == 0 {
            0.0
        } else {
            self.expanded as f64 / searches as f64
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub pairs: usize,
    pub totals: Vec<AlgorithmTotals>,
    /// Pairs where found ladders differ in weight, or only some algorithms found one
    pub disagreements: Vec<(String, String)>,
    pub duration: Duration,
}

/// Pick `count` random (start, goal) pairs from the graph's words
pub fn random_pairs<R: Rng + ?Sized>(
    graph: &WordGraph,
    count: usize,
    rng: &mut R,
) -> Vec<(String, String)> {
    let words: Vec<&Word> = graph.words().collect();
    (0..count)
        .filter_map(|_| {
            let start = words.choose(rng)?;
            let goal = words.choose(rng)?;
            Some((start.text().to_string(), goal.text().to_string()))
        })
        .collect()
}

/// Run every algorithm on every pair
///
/// # Errors
///
/// Returns the first `SearchError`, which only happens when a pair names a
/// word outside the graph.
pub fn run_benchmark(
    graph: &WordGraph,
    algorithms: &[SearchAlgorithm],
    pairs: &[(String, String)],
    budget: &SearchBudget,
    show_progress: bool,
) -> Result<BenchmarkResult, SearchError> {
    let started = Instant::now();
    let mut totals: Vec<AlgorithmTotals> = algorithms
        .iter()
        .map(|a| AlgorithmTotals::new(a.name()))
        .collect();
    let mut disagreements = Vec::new();

    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    for (start, goal) in pairs {
        pb.set_message(format!("{start} → {goal}"));
        let mut weights: Vec<Option<f64>> = Vec::with_capacity(algorithms.len());

        for (algorithm, total) in algorithms.iter().zip(&mut totals) {
            let search_start = Instant::now();
            let report = algorithm.search_with_report(graph, start, goal, budget)?;
            total.duration += search_start.elapsed();
            total.expanded += report.expanded;

            match &report.outcome {
                PathResult::Found(path) => {
                    total.found += 1;
                    weights.push(Some(path.total_weight()));
                }
                PathResult::NoPath => {
                    total.no_path += 1;
                    weights.push(None);
                }
                PathResult::Cancelled => total.cancelled += 1,
            }
        }

        if !weights_agree(&weights) {
            tracing::warn!(%start, %goal, ?weights, "algorithms disagree");
            disagreements.push((start.clone(), goal.clone()));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(BenchmarkResult {
        pairs: pairs.len(),
        totals,
        disagreements,
        duration: started.elapsed(),
    })
}

/// All completed searches found the same weight, or all found nothing
fn weights_agree(weights: &[Option<f64>]) -> bool {
    weights.windows(2).all(|pair| match (pair[0], pair[1]) {
        (Some(a), Some(b)) => (a - b).abs() < WEIGHT_TOLERANCE,
        (None, None) => true,
        _ => false,
    })
}
