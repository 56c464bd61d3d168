//! Neighbor listing command
//!
//! Shows the wildcard buckets of a word and the words one substitution away.

use crate::core::{Pattern, Word, patterns};
use crate::error::LadderError;
use crate::graph::{NeighborMode, NeighborResolver, VisitedSet, WordIndex};
use crate::wordlists::Dictionary;

/// One wildcard bucket of the queried word
pub struct BucketSummary {
    pub pattern: Pattern,
    /// Dictionary words in the bucket, the queried word excluded
    pub words: Vec<Word>,
}

/// Result of listing a word's neighbors
pub struct NeighborsResult {
    pub word: Word,
    pub in_dictionary: bool,
    pub buckets: Vec<BucketSummary>,
    pub neighbors: Vec<Word>,
}

/// List the single-substitution neighbors of `word`
///
/// # Errors
///
/// Returns an error if the word is invalid.
pub fn list_neighbors(
    word: &str,
    dictionary: &Dictionary,
    mode: NeighborMode,
) -> Result<NeighborsResult, LadderError> {
    let word = Word::new(word)?;
    let index = WordIndex::build(dictionary, word.len());

    let buckets = patterns(&word)
        .map(|(_, pattern)| {
            let words = index
                .bucket(&pattern)
                .filter(|&w| w != &word)
                .cloned()
                .collect();
            BucketSummary { pattern, words }
        })
        .collect();

    let neighbors = NeighborResolver::new(&index, mode)
        .unvisited(&word, &VisitedSet::new())
        .into_iter()
        .cloned()
        .collect();

    Ok(NeighborsResult {
        in_dictionary: index.contains(&word),
        word,
        buckets,
        neighbors,
    })
}
