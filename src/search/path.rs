//! Search results handed to callers

use crate::core::Word;
use std::fmt;

/// A word ladder from start to goal
///
/// Consecutive words are graph neighbors. A single-word path means start and
/// goal were the same word.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    words: Vec<Word>,
    total_weight: f64,
}

impl Path {
    pub(crate) fn new(words: Vec<Word>, total_weight: f64) -> Self {
        debug_assert!(!words.is_empty(), "paths always hold the start word");
        Self {
            words,
            total_weight,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words as string slices
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }

    /// Sum of edge weights along the path
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of edges (one less than the number of words)
    #[must_use]
    pub fn hops(&self) -> usize {
        self.words.len() - 1
    }

    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    #[must_use]
    pub fn goal(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts = self.texts();
        write!(f, "{}", texts.join(" -> "))
    }
}

/// Outcome of a search that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    Found(Path),
    /// Start and goal lie in different components
    NoPath,
    /// The search budget ran out or the cancel flag was raised
    Cancelled,
}

impl PathResult {
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath | Self::Cancelled => None,
        }
    }

    #[must_use]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath | Self::Cancelled => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A `PathResult` together with how much work produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: PathResult,
    /// Nodes popped from the frontier and expanded
    pub expanded: usize,
}
