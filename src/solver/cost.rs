//! Path cost model
//!
//! Search keys are `travelled + hamming(candidate, end)`. The Hamming term never
//! overestimates the number of substitutions left. How `travelled` grows is set
//! by two policies, [`VowelRule`] and [`IncrementScope`].

use crate::core::Word;
use crate::error::LadderError;

/// Letters treated as vowels by [`VowelRule::VowelsOnly`]
pub const VOWELS: [u8; 6] = *b"aeiouy";

/// Whether `letter` is one of [`VOWELS`]
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter.to_ascii_lowercase())
}

/// Count positions at which two equal-length strings differ
///
/// Lengths are measured in characters.
///
/// # Errors
/// Returns `LadderError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use word_ladder::solver::hamming;
///
/// assert_eq!(hamming("hello", "jelly").unwrap(), 2);
/// assert_eq!(hamming("fun", "ban").unwrap(), 2);
/// assert_eq!(hamming("todd", "john").unwrap(), 3);
/// assert!(hamming("cat", "cats").is_err());
/// ```
pub fn hamming(a: &str, b: &str) -> Result<usize, LadderError> {
    let left = a.chars().count();
    let right = b.chars().count();
    if left != right {
        return Err(LadderError::LengthMismatch { left, right });
    }

    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Which differing positions add to the path cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VowelRule {
    /// Every differing position costs 1
    #[default]
    CountAllDifferingPositions,
    /// A differing position costs 1 only when the new letter is a vowel
    VowelsOnly,
}

/// Which pair of words the cost increment compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncrementScope {
    /// The expanded word against each candidate; every frontier entry carries
    /// its own travelled cost
    #[default]
    PerEdge,
    /// The last two words of the path already built, summed into one
    /// accumulator per expansion round that starts at the popped entry's key
    TrailingPair,
}

/// Cost policy of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostModel {
    pub vowels: VowelRule,
    pub scope: IncrementScope,
}

impl CostModel {
    #[must_use]
    pub const fn new(vowels: VowelRule, scope: IncrementScope) -> Self {
        Self { vowels, scope }
    }

    /// Trailing-pair increments counting every differing position
    #[must_use]
    pub const fn legacy() -> Self {
        Self::new(
            VowelRule::CountAllDifferingPositions,
            IncrementScope::TrailingPair,
        )
    }

    /// Cost of turning `from` into `to`
    ///
    /// The vowel test looks at the letter `to` has at each differing position.
    #[must_use]
    pub fn increment(&self, from: &Word, to: &Word) -> usize {
        to.differences(from)
            .filter(|&(_, letter)| match self.vowels {
                VowelRule::CountAllDifferingPositions => true,
                VowelRule::VowelsOnly => is_vowel(letter),
            })
            .count()
    }

    /// Increment between the last two words of `path`
    ///
    /// A one-word path compares its word with itself and costs nothing.
    #[must_use]
    pub fn trailing_increment(&self, path: &[&Word]) -> usize {
        match path {
            [] => 0,
            [only] => self.increment(only, only),
            [.., previous, last] => self.increment(previous, last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hamming_identity() {
        for w in ["cat", "cold", "warm", "a"] {
            assert_eq!(hamming(w, w).unwrap(), 0);
        }
    }

    #[test]
    fn hamming_symmetry() {
        let pairs = [("cold", "warm"), ("cat", "dog"), ("hello", "jelly")];
        for (a, b) in pairs {
            assert_eq!(hamming(a, b).unwrap(), hamming(b, a).unwrap());
        }
    }

    #[test]
    fn hamming_known_values() {
        assert_eq!(hamming("cold", "warm").unwrap(), 4);
        assert_eq!(hamming("cat", "dog").unwrap(), 3);
        assert_eq!(hamming("cat", "cot").unwrap(), 1);
        assert_eq!(hamming("", "").unwrap(), 0);
    }

    #[test]
    fn hamming_length_mismatch() {
        assert_eq!(
            hamming("cat", "cats"),
            Err(LadderError::LengthMismatch { left: 3, right: 4 })
        );
    }

    #[test]
    fn hamming_counts_characters_not_bytes() {
        assert_eq!(hamming("café", "cafe").unwrap(), 1);
    }

    #[test]
    fn vowels() {
        for letter in *b"aeiouyAEIOUY" {
            assert!(is_vowel(letter));
        }
        for letter in *b"bcdxz" {
            assert!(!is_vowel(letter));
        }
    }

    #[test]
    fn increment_counts_all_positions_by_default() {
        let model = CostModel::default();
        assert_eq!(model.increment(&word("cat"), &word("cot")), 1);
        assert_eq!(model.increment(&word("cat"), &word("dog")), 3);
        assert_eq!(model.increment(&word("cat"), &word("cat")), 0);
    }

    #[test]
    fn increment_vowels_only_checks_new_letter() {
        let model = CostModel::new(VowelRule::VowelsOnly, IncrementScope::PerEdge);

        // a -> o: new letter is a vowel
        assert_eq!(model.increment(&word("cat"), &word("cot")), 1);
        // c -> b: consonant
        assert_eq!(model.increment(&word("cat"), &word("bat")), 0);
        // t -> y: 'y' counts as a vowel
        assert_eq!(model.increment(&word("cat"), &word("cay")), 1);
        // o -> a, d -> t: one vowel change
        assert_eq!(model.increment(&word("cod"), &word("cat")), 1);
    }

    #[test]
    fn trailing_increment_uses_last_two_words() {
        let model = CostModel::legacy();
        let (cat, cot, cog) = (word("cat"), word("cot"), word("cog"));

        assert_eq!(model.trailing_increment(&[]), 0);
        assert_eq!(model.trailing_increment(&[&cat]), 0);
        assert_eq!(model.trailing_increment(&[&cat, &cot]), 1);
        assert_eq!(model.trailing_increment(&[&cat, &cot, &cog]), 1);
        assert_eq!(model.trailing_increment(&[&cat, &cog]), 2);
    }

    #[test]
    fn default_and_legacy_models() {
        let default = CostModel::default();
        assert_eq!(default.vowels, VowelRule::CountAllDifferingPositions);
        assert_eq!(default.scope, IncrementScope::PerEdge);

        let legacy = CostModel::legacy();
        assert_eq!(legacy.vowels, VowelRule::CountAllDifferingPositions);
        assert_eq!(legacy.scope, IncrementScope::TrailingPair);
    }
}
