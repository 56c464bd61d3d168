//! Wildcard pattern index
//!
//! Edges of the word graph are never materialized. Each word is stored once in
//! an arena and referenced from one bucket per letter position, keyed by the
//! pattern that position produces. Words sharing a bucket are neighbors.

use crate::core::{Pattern, Word, patterns};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Mapping from pattern to the dictionary words that produce it
///
/// Read-only after construction, so one index can serve any number of
/// concurrent searches over words of its length.
#[derive(Debug, Clone)]
pub struct WordIndex {
    word_length: usize,
    words: Vec<Word>,
    buckets: FxHashMap<Pattern, Vec<usize>>,
}

impl WordIndex {
    /// Build the index from every word of exactly `length` letters
    ///
    /// Words of any other length are skipped. A word given more than once is
    /// stored once. Bucket order follows insertion order.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::graph::WordIndex;
    ///
    /// let words: Vec<Word> = ["cat", "cats", "dog"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let index = WordIndex::build(&words, 3);
    ///
    /// assert_eq!(index.word_count(), 2);
    /// assert!(!index.contains(&Word::new("cats").unwrap()));
    /// ```
    pub fn build<'w, I>(words: I, length: usize) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut index = Self {
            word_length: length,
            words: Vec::new(),
            buckets: FxHashMap::default(),
        };

        for word in words {
            if word.len() != length || index.contains(word) {
                continue;
            }

            let id = index.words.len();
            for (_, pattern) in patterns(word) {
                index.buckets.entry(pattern).or_default().push(id);
            }
            index.words.push(word.clone());
        }

        debug!(
            length,
            words = index.words.len(),
            buckets = index.buckets.len(),
            "built pattern index"
        );

        index
    }

    /// Length of every indexed word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct indexed words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct patterns
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words matching `pattern`, in insertion order
    ///
    /// Unknown patterns yield nothing.
    pub fn bucket<'a>(&'a self, pattern: &Pattern) -> impl Iterator<Item = &'a Word> + use<'a> {
        self.buckets
            .get(pattern)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&id| &self.words[id])
    }

    /// Whether `word` was indexed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        if word.len() != self.word_length {
            return false;
        }
        // Any one of the word's patterns is enough to find it
        let first = Pattern::mask(word, 0);
        self.bucket(&first).any(|w| w == word)
    }

    /// All indexed words, in insertion order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
