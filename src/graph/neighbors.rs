//! Neighbor discovery over the pattern index

use super::WordIndex;
use crate::core::{Word, patterns};
use rustc_hash::{FxHashMap, FxHashSet};

/// Words already scheduled during one search, with the lowest cost each was
/// scheduled at
///
/// Grows monotonically and is dropped when the search returns.
#[derive(Debug, Default)]
pub struct VisitedSet<'a> {
    costs: FxHashMap<&'a Word, usize>,
}

impl<'a> VisitedSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` was scheduled at `cost`, keeping the lowest cost seen
    pub fn record(&mut self, word: &'a Word, cost: usize) {
        self.costs
            .entry(word)
            .and_modify(|best| *best = (*best).min(cost))
            .or_insert(cost);
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.costs.contains_key(word)
    }

    /// Lowest recorded cost for `word`
    #[must_use]
    pub fn cost_of(&self, word: &Word) -> Option<usize> {
        self.costs.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// How repeated bucket hits are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborMode {
    /// Skip the queried word and report each neighbor once
    #[default]
    Distinct,
    /// Report every bucket hit, including the queried word itself once per
    /// position when it is indexed and unvisited
    Raw,
}

/// Enumerates single-substitution neighbors of a word that are not yet visited
#[derive(Debug, Clone, Copy)]
pub struct NeighborResolver<'a> {
    index: &'a WordIndex,
    mode: NeighborMode,
}

impl<'a> NeighborResolver<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex, mode: NeighborMode) -> Self {
        Self { index, mode }
    }

    #[must_use]
    pub const fn mode(&self) -> NeighborMode {
        self.mode
    }

    /// Candidates reachable from `word` in one substitution that are not keys of
    /// `visited`
    ///
    /// Results follow pattern position order, then bucket insertion order.
    /// `word` does not have to be indexed itself, but a word of a different
    /// length than the index has no neighbors.
    #[must_use]
    pub fn unvisited(&self, word: &Word, visited: &VisitedSet<'_>) -> Vec<&'a Word> {
        self.collect(word, |candidate| !visited.contains(candidate))
    }

    /// Every candidate reachable from `word` in one substitution, visited or not
    ///
    /// Same order and mode handling as [`NeighborResolver::unvisited`].
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&'a Word> {
        self.collect(word, |_| true)
    }

    fn collect(&self, word: &Word, keep: impl Fn(&Word) -> bool) -> Vec<&'a Word> {
        if word.len() != self.index.word_length() {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut seen: FxHashSet<&'a Word> = FxHashSet::default();

        for (_, pattern) in patterns(word) {
            for candidate in self.index.bucket(&pattern) {
                if !keep(candidate) {
                    continue;
                }
                match self.mode {
                    NeighborMode::Raw => found.push(candidate),
                    NeighborMode::Distinct => {
                        if candidate != word && seen.insert(candidate) {
                            found.push(candidate);
                        }
                    }
                }
            }
        }

        found
    }
}
