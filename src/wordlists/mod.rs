//! Word counts for building graphs
//!
//! Provides an embedded sample vocabulary compiled into the binary and a
//! loader for word-count files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
