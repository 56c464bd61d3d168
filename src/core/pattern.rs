//! Wildcard patterns
//!
//! A pattern is a word with exactly one letter replaced by [`WILDCARD`]. Two
//! distinct words of equal length are one substitution apart exactly when they
//! share a pattern, so patterns serve as bucket keys for neighbor discovery.

use super::Word;
use std::fmt;

/// Marker standing in for the masked letter
pub const WILDCARD: u8 = b'?';

/// A word with one position masked
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    text: String,
    position: usize,
}

impl Pattern {
    /// Mask the letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= word.len()`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Pattern, Word};
    ///
    /// let word = Word::new("cold").unwrap();
    /// assert_eq!(Pattern::mask(&word, 2).text(), "co?d");
    /// ```
    #[must_use]
    pub fn mask(word: &Word, position: usize) -> Self {
        assert!(
            position < word.len(),
            "position {position} out of range for '{word}'"
        );

        let mut bytes = word.bytes().to_vec();
        bytes[position] = WILDCARD;

        // Words are ASCII letters and the wildcard is ASCII
        let text = bytes.into_iter().map(char::from).collect();

        Self { text, position }
    }

    /// The pattern text, e.g. `"co?d"`
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the masked letter
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether `word` produces this pattern when its masked position is hidden
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.text.len()
            && word
                .bytes()
                .iter()
                .zip(self.text.bytes())
                .enumerate()
                .all(|(i, (&letter, p))| i == self.position || letter == p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Every pattern of `word`, one per position, in position order
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, patterns};
///
/// let word = Word::new("cat").unwrap();
/// let texts: Vec<String> = patterns(&word).map(|(_, p)| p.text().to_string()).collect();
/// assert_eq!(texts, ["?at", "c?t", "ca?"]);
/// ```
pub fn patterns(word: &Word) -> impl Iterator<Item = (usize, Pattern)> + '_ {
    (0..word.len()).map(move |i| (i, Pattern::mask(word, i)))
}
