//! Vocabulary loading utilities
//!
//! Reads word counts from text files or the embedded sample. A line holds
//! either a bare `word` (each occurrence counts once) or `word count`.
//! Blank lines and `#` comments are ignored.

use super::SAMPLE;
use crate::core::Word;
use crate::error::LoadError;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Raw word counts in first-seen order
pub type WordCounts = Vec<(String, u64)>;

/// Parse word counts from text
///
/// Words are lowercased; repeated words accumulate.
///
/// # Errors
///
/// Returns `LoadError::InvalidLine` if a line has more than two fields, a
/// count that is not a positive integer, or pushes a word's total past
/// `u64::MAX`.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::parse_counts;
///
/// let counts = parse_counts("cat 5\ndog\ndog\n# comment\n").unwrap();
/// assert_eq!(counts, [("cat".to_string(), 5), ("dog".to_string(), 2)]);
/// ```
pub fn parse_counts(content: &str) -> Result<WordCounts, LoadError> {
    let mut counts: WordCounts = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let invalid = || LoadError::InvalidLine {
            line: index + 1,
            content: trimmed.to_string(),
        };

        let mut fields = trimmed.split_whitespace();
        let word = fields.next().ok_or_else(invalid)?.to_lowercase();
        let count = match fields.next() {
            None => 1,
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|&c| c > 0)
                .ok_or_else(invalid)?,
        };
        if fields.next().is_some() {
            return Err(invalid());
        }

        if let Some(&position) = positions.get(&word) {
            let total = &mut counts[position].1;
            *total = total.checked_add(count).ok_or_else(invalid)?;
        } else {
            positions.insert(word.clone(), counts.len());
            counts.push((word, count));
        }
    }

    Ok(counts)
}

/// Load word counts from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or any error from
/// [`parse_counts`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCounts, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let counts = parse_counts(&content)?;
    tracing::debug!(path = %path.display(), words = counts.len(), "loaded word counts");
    Ok(counts)
}

/// Convert the embedded sample to owned counts
#[must_use]
pub fn sample_counts() -> WordCounts {
    SAMPLE
        .iter()
        .map(|&(word, count)| (word.to_string(), count))
        .collect()
}

/// Keep only words of `length` letters
///
/// This is the explicit length selection a caller makes before building;
/// `Vocabulary::new` still rejects any mismatch it is given.
#[must_use]
pub fn restrict_to_length(counts: WordCounts, length: usize) -> WordCounts {
    counts
        .into_iter()
        .filter(|(word, _)| word.chars().count() == length)
        .collect()
}

/// Drop words made of a single repeated letter, such as `aaa`
#[must_use]
pub fn drop_repeated_letter_words(counts: WordCounts) -> WordCounts {
    counts
        .into_iter()
        .filter(|(word, _)| !Word::new(word).is_ok_and(|w| w.is_single_letter_repeat()))
        .collect()
}
