//! Best-first ladder search

use super::cost::{IncrementScope, hamming};
use super::strategy::SearchOptions;
use crate::core::{Ladder, Word};
use crate::error::LadderError;
use crate::graph::{NeighborMode, NeighborResolver, VisitedSet, WordIndex};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Outcome of one search, with counters for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The ladder, or `None` when the end word is unreachable
    pub ladder: Option<Ladder>,
    /// Frontier entries popped
    pub expanded: usize,
    /// Frontier entries pushed, the start entry included
    pub scheduled: usize,
}

/// A frontier state: scheduled cost, word, and the path that reached it
struct FrontierEntry<'a> {
    cost: usize,
    travelled: usize,
    word: &'a Word,
    path: Vec<&'a Word>,
}

/// Min-heap order on (cost, word, path)
///
/// `BinaryHeap` pops the greatest entry, so every comparison is reversed.
impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.word.cmp(self.word))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

/// Ladder search over one pattern index
///
/// Each call owns its frontier and visited set, so a `LadderSearch` can be
/// shared between threads.
///
/// Under [`IncrementScope::PerEdge`] a word is scheduled again whenever a
/// strictly cheaper route to it turns up, and stale frontier entries are
/// dropped when popped. With every differing letter counted, each edge costs 1
/// and the Hamming term never overestimates, so the ladder returned has the
/// fewest steps. [`IncrementScope::TrailingPair`] schedules each word once, at
/// the cost it was first reached with.
#[derive(Debug, Clone, Copy)]
pub struct LadderSearch<'a> {
    index: &'a WordIndex,
    options: SearchOptions,
}

impl<'a> LadderSearch<'a> {
    /// Create a search over `index` with the given policies
    #[must_use]
    pub const fn new(index: &'a WordIndex, options: SearchOptions) -> Self {
        Self { index, options }
    }

    #[must_use]
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find a ladder from `start` to `end`
    ///
    /// Returns `Ok(None)` when no ladder exists.
    ///
    /// # Errors
    /// - `LadderError::LengthMismatch` if `start` and `end` differ in length
    /// - `LadderError::IndexLengthMismatch` if they do not match the index's
    ///   word length
    pub fn min_path(&self, start: &Word, end: &Word) -> Result<Option<Ladder>, LadderError> {
        self.search(start, end).map(|report| report.ladder)
    }

    /// Find a ladder from `start` to `end` and report search effort
    ///
    /// # Errors
    /// Same as [`LadderSearch::min_path`].
    pub fn search(&self, start: &Word, end: &Word) -> Result<SearchReport, LadderError> {
        if start.len() != end.len() {
            return Err(LadderError::LengthMismatch {
                left: start.len(),
                right: end.len(),
            });
        }
        if start.len() != self.index.word_length() {
            return Err(LadderError::IndexLengthMismatch {
                word: start.len(),
                index: self.index.word_length(),
            });
        }

        let resolver = NeighborResolver::new(self.index, self.options.neighbors);

        let mut visited = VisitedSet::new();
        let mut frontier = BinaryHeap::new();
        let mut expanded = 0;
        let mut scheduled = 1;

        if self.options.neighbors == NeighborMode::Distinct {
            visited.record(start, 0);
        }
        frontier.push(FrontierEntry {
            cost: 0,
            travelled: 0,
            word: start,
            path: vec![start],
        });

        let reopen = self.options.cost.scope == IncrementScope::PerEdge;

        while let Some(entry) = frontier.pop() {
            // Superseded by a cheaper entry for the same word
            if reopen && visited.cost_of(entry.word).is_some_and(|best| best < entry.cost) {
                continue;
            }
            expanded += 1;

            if entry.word == end {
                debug!(
                    start = %start,
                    end = %end,
                    expanded,
                    scheduled,
                    steps = entry.path.len() - 1,
                    "ladder found"
                );
                let words = entry.path.into_iter().cloned().collect();
                return Ok(SearchReport {
                    ladder: Ladder::new(words),
                    expanded,
                    scheduled,
                });
            }

            trace!(word = %entry.word, cost = entry.cost, "expanding");

            let candidates = if reopen {
                resolver.neighbors(entry.word)
            } else {
                resolver.unvisited(entry.word, &visited)
            };
            let scores = self.score_round(&entry, &candidates, end)?;

            for (candidate, (travelled, cost)) in candidates.into_iter().zip(scores) {
                if reopen && visited.cost_of(candidate).is_some_and(|best| best <= cost) {
                    continue;
                }
                visited.record(candidate, cost);

                let mut path = Vec::with_capacity(entry.path.len() + 1);
                path.extend_from_slice(&entry.path);
                path.push(candidate);

                frontier.push(FrontierEntry {
                    cost,
                    travelled,
                    word: candidate,
                    path,
                });
                scheduled += 1;
            }
        }

        debug!(start = %start, end = %end, expanded, scheduled, "no ladder");
        Ok(SearchReport {
            ladder: None,
            expanded,
            scheduled,
        })
    }

    /// `(travelled, cost)` for each candidate of one expansion round, in order
    fn score_round(
        &self,
        entry: &FrontierEntry<'_>,
        candidates: &[&Word],
        end: &Word,
    ) -> Result<Vec<(usize, usize)>, LadderError> {
        let model = self.options.cost;

        // Shared by every candidate of the round under the trailing-pair scope
        let mut accumulated = entry.cost;

        candidates
            .iter()
            .map(|&candidate| -> Result<(usize, usize), LadderError> {
                let travelled = match model.scope {
                    IncrementScope::PerEdge => {
                        entry.travelled + model.increment(entry.word, candidate)
                    }
                    IncrementScope::TrailingPair => {
                        accumulated += model.trailing_increment(&entry.path);
                        accumulated
                    }
                };
                Ok((travelled, travelled + hamming(candidate.text(), end.text())?))
            })
            .collect()
    }
}

/// Find a ladder between two words with the default options
///
/// Both words are normalized with [`Word::new`].
///
/// # Errors
/// - `LadderError::InvalidWord` if either word fails validation
/// - `LadderError::LengthMismatch` if the words differ in length
/// - `LadderError::IndexLengthMismatch` if they do not match the index
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::graph::WordIndex;
/// use word_ladder::solver::min_path;
///
/// let words: Vec<Word> = ["aaa", "bbb"].into_iter().map(|w| Word::new(w).unwrap()).collect();
/// let index = WordIndex::build(&words, 3);
///
/// assert!(min_path(&index, "aaa", "bbb").unwrap().is_none());
/// assert!(min_path(&index, "aaa", "bbbb").is_err());
/// ```
pub fn min_path(index: &WordIndex, start: &str, end: &str) -> Result<Option<Ladder>, LadderError> {
    let start = Word::new(start)?;
    let end = Word::new(end)?;
    LadderSearch::new(index, SearchOptions::default()).min_path(&start, &end)
}
