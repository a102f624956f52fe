//! Word graph construction by pattern bucketing
//!
//! Every word is filed under one pattern key per position, the word with that
//! position replaced by [`WILDCARD`]. Words sharing a key agree everywhere
//! except that position, so each bucket is a clique of one-letter neighbors.
//! Two distinct words can share at most one key, which means each edge is
//! produced exactly once and no deduplication pass is needed.
//!
//! Cost is O(n·L) key assignments plus O(Σ|bucket|²) pair connections, well
//! below the O(n²·L) of comparing every pair.

use super::word_graph::{NodeId, WordGraph};
use crate::core::{Vocabulary, Word};
use crate::error::ValidationError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Marker substituted into pattern keys; validated words never contain it
pub const WILDCARD: u8 = b'_';

/// Options for graph construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Generate bucket pairs on the rayon pool
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Builds a `WordGraph` from a `Vocabulary`
#[derive(Debug, Clone, Copy, Default)]
pub struct WordGraphBuilder {
    config: BuildConfig,
}

impl WordGraphBuilder {
    #[must_use]
    pub const fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the graph of one-letter neighbors
    ///
    /// Edge weight is the mean of the two endpoint counts. An empty
    /// vocabulary yields an empty graph.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Vocabulary;
    /// use word_ladder::graph::WordGraphBuilder;
    ///
    /// let vocabulary = Vocabulary::new([("cat", 5), ("cot", 3), ("dog", 4)]).unwrap();
    /// let graph = WordGraphBuilder::default().build(&vocabulary);
    ///
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 1);
    /// assert_eq!(graph.weight("cat", "cot"), Some(4.0));
    /// ```
    #[tracing::instrument(skip_all, fields(words = vocabulary.len(), parallel = self.config.parallel))]
    pub fn build(&self, vocabulary: &Vocabulary) -> WordGraph {
        let start = Instant::now();

        let nodes: Vec<(Word, u64)> = vocabulary
            .iter()
            .map(|(word, count)| (word.clone(), count))
            .collect();
        let counts: Vec<u64> = nodes.iter().map(|&(_, count)| count).collect();

        let buckets: Vec<Vec<NodeId>> = pattern_buckets(nodes.iter().map(|(word, _)| word))
            .into_iter()
            .filter(|bucket| bucket.len() > 1)
            .collect();

        let edges: Vec<(NodeId, NodeId, f64)> = if self.config.parallel {
            buckets
                .par_iter()
                .flat_map_iter(|bucket| connect_bucket(bucket, &counts))
                .collect()
        } else {
            buckets
                .iter()
                .flat_map(|bucket| connect_bucket(bucket, &counts))
                .collect()
        };

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            linked_buckets = buckets.len(),
            elapsed = ?start.elapsed(),
            "word graph built"
        );

        WordGraph::from_parts(vocabulary.word_length(), nodes, edges)
    }

    /// Validate raw counts and build in one step
    ///
    /// # Errors
    /// Returns `ValidationError` under the same rules as `Vocabulary::new`.
    pub fn build_from_counts<I, S>(&self, counts: I) -> Result<WordGraph, ValidationError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let vocabulary = Vocabulary::new(counts)?;
        Ok(self.build(&vocabulary))
    }
}

/// Pattern key for `word` with `position` replaced by the wildcard
///
/// # Panics
/// Panics if `position >= word.len()`
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::graph::pattern_key;
///
/// let word = Word::new("cat").unwrap();
/// assert_eq!(pattern_key(&word, 1), b"c_t");
/// ```
#[must_use]
pub fn pattern_key(word: &Word, position: usize) -> Vec<u8> {
    let mut key = word.chars().to_vec();
    key[position] = WILDCARD;
    key
}

/// Group word indices by pattern key
///
/// Buckets are returned in order of first appearance, including singletons.
pub fn pattern_buckets<'a, I>(words: I) -> Vec<Vec<usize>>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut slots: FxHashMap<Vec<u8>, usize> = FxHashMap::default();
    let mut buckets: Vec<Vec<usize>> = Vec::new();

    for (id, word) in words.into_iter().enumerate() {
        for position in 0..word.len() {
            let key = pattern_key(word, position);
            let slot = *slots.entry(key).or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[slot].push(id);
        }
    }

    buckets
}

/// Every unordered pair within one bucket, weighted by mean count
fn connect_bucket<'a>(
    bucket: &'a [NodeId],
    counts: &'a [u64],
) -> impl Iterator<Item = (NodeId, NodeId, f64)> + 'a {
    bucket.iter().enumerate().flat_map(move |(i, &a)| {
        bucket[i + 1..]
            .iter()
            .map(move |&b| (a, b, mean_weight(counts[a], counts[b])))
    })
}

/// Edge weight for two endpoint counts
#[inline]
#[must_use]
pub fn mean_weight(count_a: u64, count_b: u64) -> f64 {
    (count_a as f64 + count_b as f64) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    const ALPHABET: &[u8] = b"abc";

    /// All words of `length` letters over `ALPHABET`, with varied counts
    fn exhaustive_vocabulary(length: u32) -> Vocabulary {
        let total = ALPHABET.len().pow(length);
        let entries = (0..total).map(|mut n| {
            let mut text = String::new();
            for _ in 0..length {
                text.push(ALPHABET[n % ALPHABET.len()] as char);
                n /= ALPHABET.len();
            }
            let count = (text.bytes().map(u64::from).sum::<u64>() % 7) + 1;
            (text, count)
        });
        Vocabulary::new(entries).unwrap()
    }

    fn differs_by_one(a: &str, b: &str) -> bool {
        a.len() == b.len() && a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() == 1
    }

    fn edge_set(graph: &WordGraph) -> FxHashSet<(String, String)> {
        graph
            .edges()
            .map(|edge| {
                let (a, b) = (edge.source.text(), edge.target.text());
                if a < b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .collect()
    }

    fn known_ladder() -> Vocabulary {
        Vocabulary::new([("cat", 5), ("cot", 3), ("cog", 2), ("dog", 4)]).unwrap()
    }

    #[test]
    fn pattern_key_replaces_position() {
        let word = Word::new("dog").unwrap();
        assert_eq!(pattern_key(&word, 0), b"_og");
        assert_eq!(pattern_key(&word, 2), b"do_");
    }

    #[test]
    fn buckets_group_one_away_words() {
        let words: Vec<Word> = ["cat", "cot", "cut", "dog"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let buckets = pattern_buckets(&words);

        // "c_t" holds cat, cot, cut
        assert!(buckets.iter().any(|b| b == &[0, 1, 2]));
        // dog shares no key with the others
        assert!(buckets.iter().filter(|b| b.contains(&3)).all(|b| b.len() == 1));
    }

    #[test]
    fn build_known_ladder() {
        let graph = WordGraphBuilder::default().build(&known_ladder());

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight("cat", "cot"), Some(4.0));
        assert_eq!(graph.weight("cot", "cog"), Some(2.5));
        assert_eq!(graph.weight("cog", "dog"), Some(3.0));
        assert_eq!(graph.weight("cat", "dog"), None);
        assert_eq!(graph.count("cat"), Ok(5));
    }

    #[test]
    fn build_empty_vocabulary() {
        let graph = WordGraphBuilder::default().build(&Vocabulary::default());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn build_from_counts_rejects_mixed_lengths() {
        let result = WordGraphBuilder::default().build_from_counts([("cat", 1), ("cart", 1)]);
        assert!(matches!(
            result,
            Err(ValidationError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn candidates_match_brute_force() {
        let vocabulary = exhaustive_vocabulary(3);
        let graph = WordGraphBuilder::default().build(&vocabulary);

        let words: Vec<&str> = vocabulary.iter().map(|(w, _)| w.text()).collect();
        let mut expected = FxHashSet::default();
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                if differs_by_one(a, b) {
                    let pair = if a < b { (*a, *b) } else { (*b, *a) };
                    expected.insert((pair.0.to_string(), pair.1.to_string()));
                }
            }
        }

        // 27 words, each with 3 positions × 2 alternatives = 6 neighbors
        assert_eq!(expected.len(), 27 * 6 / 2);
        assert_eq!(edge_set(&graph), expected);
        assert_eq!(graph.edge_count(), expected.len());
    }

    #[test]
    fn edges_are_valid_unique_and_weighted() {
        let graph = WordGraphBuilder::default().build(&exhaustive_vocabulary(4));

        let mut seen = FxHashSet::default();
        for edge in graph.edges() {
            let (a, b) = (edge.source.text(), edge.target.text());
            assert_ne!(a, b, "self-loop on {a}");
            assert!(differs_by_one(a, b), "{a} and {b} are not one letter apart");

            let key = if a < b { (a, b) } else { (b, a) };
            assert!(seen.insert(key), "duplicate edge {a}-{b}");

            let expected = mean_weight(graph.count(a).unwrap(), graph.count(b).unwrap());
            assert_eq!(edge.weight, expected);
            assert_eq!(graph.weight(a, b), Some(edge.weight));
            assert_eq!(graph.weight(b, a), Some(edge.weight));
        }
    }

    #[test]
    fn neighbor_lists_are_symmetric() {
        let graph = WordGraphBuilder::default().build(&exhaustive_vocabulary(3));
        for word in graph.words() {
            for (neighbor, weight) in graph.neighbors(word.text()).unwrap() {
                let back = graph
                    .neighbors(neighbor.text())
                    .unwrap()
                    .find(|(w, _)| *w == word)
                    .map(|(_, w)| w);
                assert_eq!(back, Some(weight));
            }
        }
    }

    #[test]
    fn parallel_and_sequential_builds_agree() {
        let vocabulary = exhaustive_vocabulary(4);
        let parallel = WordGraphBuilder::new(BuildConfig { parallel: true }).build(&vocabulary);
        let sequential = WordGraphBuilder::new(BuildConfig { parallel: false }).build(&vocabulary);

        let parallel_edges: Vec<_> = parallel.edges().collect();
        let sequential_edges: Vec<_> = sequential.edges().collect();
        assert_eq!(parallel_edges, sequential_edges);
    }

    #[test]
    fn mean_weight_is_exact_average() {
        assert_eq!(mean_weight(5, 3), 4.0);
        assert_eq!(mean_weight(2, 3), 2.5);
        assert_eq!(mean_weight(1, 1), 1.0);
    }
}
