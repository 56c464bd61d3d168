//! Ladder solving command
//!
//! Prepares one query the way a front end should: normalize both words, check
//! their lengths, make sure the end word is part of the graph, then search.

use crate::core::{Ladder, Word};
use crate::error::LadderError;
use crate::graph::WordIndex;
use crate::solver::{LadderSearch, SearchOptions};
use crate::wordlists::Dictionary;
use std::iter;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for solving one ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    pub options: SearchOptions,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// Result of solving one ladder
#[derive(Debug, Clone)]
pub struct LadderResult {
    pub start: Word,
    pub end: Word,
    pub ladder: Option<Ladder>,
    /// Distinct words in the graph the search ran over
    pub graph_words: usize,
    pub expanded: usize,
    pub scheduled: usize,
    pub duration: Duration,
}

/// Solve one ladder against a dictionary
///
/// The end word joins the graph even when the dictionary lacks it; the start
/// word never has to be in the dictionary.
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (empty or not ASCII letters)
/// - The two words differ in length
pub fn solve_ladder(config: SolveConfig, dictionary: &Dictionary) -> Result<LadderResult, LadderError> {
    let start = Word::new(&config.start)?;
    let end = Word::new(&config.end)?;

    if start.len() != end.len() {
        return Err(LadderError::LengthMismatch {
            left: start.len(),
            right: end.len(),
        });
    }

    let timer = Instant::now();
    let index = WordIndex::build(dictionary.iter().chain(iter::once(&end)), start.len());
    let report = LadderSearch::new(&index, config.options).search(&start, &end)?;
    let duration = timer.elapsed();

    info!(
        start = %start,
        end = %end,
        options = %config.options.label(),
        found = report.ladder.is_some(),
        elapsed_ms = duration.as_millis(),
        "solved"
    );

    Ok(LadderResult {
        start,
        end,
        ladder: report.ladder,
        graph_words: index.word_count(),
        expanded: report.expanded,
        scheduled: report.scheduled,
        duration,
    })
}
