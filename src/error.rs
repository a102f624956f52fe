//! Error types for word ladder construction and search
//!
//! Every failure is a value returned to the caller. `PathResult::NoPath` and
//! `PathResult::Cancelled` are ordinary outcomes and live in `search`, not here.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Input that was rejected before any graph construction or traversal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("word '{word}' has length {found}, vocabulary length is {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("word '{word}' has a zero count")]
    ZeroCount { word: String },

    #[error("total count for word '{word}' exceeds u64::MAX")]
    CountOverflow { word: String },

    #[error("{role} word must not be empty")]
    EmptyQuery { role: &'static str },
}

/// A word that was looked up but is not a node of the graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("word '{word}' is not in the graph")]
pub struct NodeNotFound {
    pub word: String,
}

impl NodeNotFound {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Failures reported by a single search call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{role} {source}")]
    NodeNotFound {
        role: &'static str,
        #[source]
        source: NodeNotFound,
    },

    #[error("unsupported algorithm '{0}' (expected one of: dijkstra, astar)")]
    UnsupportedAlgorithm(String),

    /// The graph broke one of its own invariants; do not keep using it.
    #[error("corrupted graph: {0}")]
    Corrupted(String),
}

/// Failures while reading a vocabulary source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse '{content}'")]
    InvalidLine { line: usize, content: String },
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NodeNotFound),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
