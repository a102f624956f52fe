//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod ladder;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{AlgorithmTotals, BenchmarkResult, random_pairs, run_benchmark};
pub use ladder::{LadderConfig, LadderResult, find_ladder};
