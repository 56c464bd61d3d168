//! Benchmark command
//!
//! Solves many random ladders over one shared index to measure search effort.

use crate::core::Word;
use crate::error::LadderError;
use crate::graph::WordIndex;
use crate::solver::{LadderSearch, SearchOptions};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random start/end pairs
    pub count: usize,
    /// Word length the pairs are drawn from
    pub length: usize,
    pub seed: u64,
    pub options: SearchOptions,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(count: usize, length: usize) -> Self {
        Self {
            count,
            length,
            seed: 42,
            options: SearchOptions::default(),
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub missing: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub average_expanded: f64,
    /// Ladder steps to number of ladders with that many steps
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run searches between random pairs of same-length dictionary words
///
/// Pairs are drawn with a seeded RNG, so a given dictionary and configuration
/// always test the same pairs. Searches run in parallel over one shared index.
///
/// # Errors
///
/// Returns an error if a search rejects its words, which cannot happen for
/// pairs drawn from the index itself.
pub fn run_benchmark(config: &BenchmarkConfig, dictionary: &Dictionary) -> Result<BenchmarkResult, LadderError> {
    let index = WordIndex::build(dictionary, config.length);
    let pairs = random_pairs(&index, config.count, config.seed);
    let search = LadderSearch::new(&index, config.options);

    info!(
        pairs = pairs.len(),
        length = config.length,
        words = index.word_count(),
        options = %config.options.label(),
        "starting benchmark"
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let reports = pairs
        .par_iter()
        .map(|(from, to)| {
            let report = search.search(from, to);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut found = 0;
    let mut total_steps = 0;
    let mut total_expanded = 0;
    let mut min_steps = usize::MAX;
    let mut max_steps = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for report in &reports {
        total_expanded += report.expanded;
        if let Some(ladder) = &report.ladder {
            let steps = ladder.steps();
            found += 1;
            total_steps += steps;
            min_steps = min_steps.min(steps);
            max_steps = max_steps.max(steps);
            *distribution.entry(steps).or_insert(0) += 1;
        }
    }

    let total_pairs = reports.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_pairs,
        found,
        missing: total_pairs - found,
        average_steps: if found > 0 {
            total_steps as f64 / found as f64
        } else {
            0.0
        },
        min_steps: if found > 0 { min_steps } else { 0 },
        max_steps,
        average_expanded: if total_pairs > 0 {
            total_expanded as f64 / total_pairs as f64
        } else {
            0.0
        },
        distribution,
        duration,
        searches_per_second: if secs > 0.0 {
            total_pairs as f64 / secs
        } else {
            0.0
        },
    })
}

/// Draw `count` start/end pairs of distinct indexed words
fn random_pairs(index: &WordIndex, count: usize, seed: u64) -> Vec<(Word, Word)> {
    let words: Vec<&Word> = index.words().collect();
    if words.len() < 2 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let picked: Vec<&&Word> = words.choose_multiple(&mut rng, 2).collect();
        if let [from, to] = picked.as_slice() {
            pairs.push(((**from).clone(), (**to).clone()));
        }
    }
    pairs
}
