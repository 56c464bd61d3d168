//! Finished word ladders

use super::Word;
use std::fmt;

/// An ordered chain of words from a start word to an end word, inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// Wrap an ordered sequence of words
    ///
    /// Returns `None` for an empty sequence; a ladder always holds its start word.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Words from start to end
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, start and end included
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Ladders are never empty
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of transformations (one less than the word count)
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len() - 1
    }

    /// First word
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    /// Last word
    #[must_use]
    pub fn end(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Whether every consecutive pair has equal length and differs in exactly
    /// one position
    #[must_use]
    pub fn is_single_substitution_chain(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| pair[0].len() == pair[1].len() && pair[0].differences(&pair[1]).count() == 1)
    }

    /// Iterate over the words
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Ladder> for Vec<Word> {
    fn from(ladder: Ladder) -> Self {
        ladder.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(words: &[&str]) -> Ladder {
        Ladder::new(words.iter().map(|w| Word::new(w).unwrap()).collect()).unwrap()
    }

    #[test]
    fn empty_is_rejected() {
        assert!(Ladder::new(Vec::new()).is_none());
    }

    #[test]
    fn endpoints_and_steps() {
        let l = ladder(&["cold", "cord", "card", "ward", "warm"]);
        assert_eq!(l.start().text(), "cold");
        assert_eq!(l.end().text(), "warm");
        assert_eq!(l.len(), 5);
        assert_eq!(l.steps(), 4);
    }

    #[test]
    fn single_word_ladder() {
        let l = ladder(&["cat"]);
        assert_eq!(l.start(), l.end());
        assert_eq!(l.steps(), 0);
        assert!(l.is_single_substitution_chain());
    }

    #[test]
    fn substitution_chain_check() {
        assert!(ladder(&["cat", "cot", "cog", "dog"]).is_single_substitution_chain());
        assert!(!ladder(&["cat", "cog"]).is_single_substitution_chain());
        assert!(!ladder(&["cat", "cat"]).is_single_substitution_chain());
        assert!(!ladder(&["cat", "cats"]).is_single_substitution_chain());
    }

    #[test]
    fn display_space_joined() {
        assert_eq!(ladder(&["cat", "cot", "cog"]).to_string(), "cat cot cog");
    }
}
