//! Fixed-length vocabulary with occurrence counts

use super::Word;
use crate::error::ValidationError;
use rustc_hash::FxHashMap;

/// Words of one fixed length, each with a positive occurrence count
///
/// Entries keep first-insertion order so graphs built from the same input are
/// identical, including neighbor order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    word_length: Option<usize>,
    entries: Vec<(Word, u64)>,
    positions: FxHashMap<Word, usize>,
}

impl Vocabulary {
    /// Validate a word → count mapping
    ///
    /// Repeated words have their counts summed.
    ///
    /// # Errors
    /// Returns `ValidationError` if a word is invalid, a count is zero, or two
    /// words differ in length. Nothing is skipped or truncated.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new([("cat", 5), ("cot", 3)]).unwrap();
    /// assert_eq!(vocabulary.len(), 2);
    /// assert_eq!(vocabulary.word_length(), Some(3));
    ///
    /// assert!(Vocabulary::new([("cat", 1), ("cats", 1)]).is_err());
    /// ```
    pub fn new<I, S>(counts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut word_length = None;
        let mut entries: Vec<(Word, u64)> = Vec::new();
        let mut positions: FxHashMap<Word, usize> = FxHashMap::default();

        for (raw, count) in counts {
            let raw = raw.as_ref();
            let word = Word::new(raw).map_err(|source| ValidationError::InvalidWord {
                word: raw.to_string(),
                source,
            })?;

            if count == 0 {
                return Err(ValidationError::ZeroCount {
                    word: word.text().to_string(),
                });
            }

            match word_length {
                None => word_length = Some(word.len()),
                Some(expected) if expected != word.len() => {
                    return Err(ValidationError::LengthMismatch {
                        found: word.len(),
                        word: word.text().to_string(),
                        expected,
                    });
                }
                Some(_) => {}
            }

            if let Some(&position) = positions.get(&word) {
                let total = &mut entries[position].1;
                *total = total
                    .checked_add(count)
                    .ok_or_else(|| ValidationError::CountOverflow {
                        word: word.text().to_string(),
                    })?;
            } else {
                positions.insert(word.clone(), entries.len());
                entries.push((word, count));
            }
        }

        Ok(Self {
            word_length,
            entries,
            positions,
        })
    }

    /// Length shared by every word, `None` when empty
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a word, if present
    #[must_use]
    pub fn count(&self, word: &str) -> Option<u64> {
        self.positions.get(word).map(|&position| self.entries[position].1)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Word, u64)> {
        self.entries.iter().map(|(word, count)| (word, *count))
    }

    /// Total occurrences across all words, saturating at `u64::MAX`
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.entries
            .iter()
            .fold(0, |total: u64, &(_, count)| total.saturating_add(count))
    }
}
