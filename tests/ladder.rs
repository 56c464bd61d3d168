//! End-to-end properties of index construction and ladder search.

use std::collections::VecDeque;
use std::thread;
use word_ladder::LadderError;
use word_ladder::commands::{SolveConfig, solve_ladder};
use word_ladder::core::{Ladder, Word};
use word_ladder::graph::{NeighborMode, NeighborResolver, WordIndex};
use word_ladder::solver::{LadderSearch, SearchOptions, hamming, min_path};
use rustc_hash::FxHashMap;
use word_ladder::wordlists::Dictionary;
use word_ladder::wordlists::loader::{embedded, words_from_slice};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(w).unwrap()).collect()
}

fn texts(ladder: &Ladder) -> Vec<&str> {
    ladder.iter().map(Word::text).collect()
}

#[test]
fn hamming_is_zero_on_identity_and_symmetric() {
    for w in ["cat", "cold", "warm", "ladder"] {
        assert_eq!(hamming(w, w).unwrap(), 0);
    }
    for (a, b) in [("cold", "warm"), ("cat", "dog"), ("lead", "gold")] {
        assert_eq!(hamming(a, b).unwrap(), hamming(b, a).unwrap());
    }
}

#[test]
fn cat_to_dog_with_default_options() {
    let index = WordIndex::build(&words(&["cat", "cot", "cog", "dog"]), 3);
    let ladder = min_path(&index, "cat", "dog").unwrap().unwrap();

    assert_eq!(texts(&ladder), vec!["cat", "cot", "cog", "dog"]);
    assert!(ladder.is_single_substitution_chain());
}

#[test]
fn cat_to_dog_with_legacy_options() {
    let dictionary = words(&["cat", "cot", "cog", "dog"]);
    let index = WordIndex::build(&dictionary, 3);
    let search = LadderSearch::new(&index, SearchOptions::legacy());

    let start = Word::new("cat").unwrap();
    let end = Word::new("dog").unwrap();
    let ladder = search.min_path(&start, &end).unwrap().unwrap();

    assert_eq!(ladder.start(), &start);
    assert_eq!(ladder.end(), &end);
    assert!(ladder.iter().all(|w| w == &start || dictionary.contains(w)));
}

#[test]
fn same_word_is_a_one_word_ladder() {
    let index = WordIndex::build(&words(&["cat", "cot"]), 3);
    for options in [SearchOptions::default(), SearchOptions::legacy()] {
        let word = Word::new("cat").unwrap();
        let ladder = LadderSearch::new(&index, options)
            .min_path(&word, &word)
            .unwrap()
            .unwrap();
        assert_eq!(texts(&ladder), vec!["cat"]);
        assert_eq!(ladder.steps(), 0);
    }
}

#[test]
fn disconnected_words_have_no_ladder() {
    let index = WordIndex::build(&words(&["aaa", "bbb"]), 3);
    assert!(min_path(&index, "aaa", "bbb").unwrap().is_none());

    let search = LadderSearch::new(&index, SearchOptions::legacy());
    let (aaa, bbb) = (Word::new("aaa").unwrap(), Word::new("bbb").unwrap());
    assert!(search.min_path(&aaa, &bbb).unwrap().is_none());
}

#[test]
fn index_excludes_other_lengths() {
    let index = WordIndex::build(&words(&["cat", "cats", "dog"]), 3);

    assert_eq!(index.word_count(), 2);
    assert!(index.words().all(|w| w.text() != "cats"));
    assert!(!index.contains(&Word::new("cats").unwrap()));
}

#[test]
fn length_mismatch_is_an_error() {
    let index = WordIndex::build(&words(&["cat", "cot"]), 3);
    assert!(matches!(
        min_path(&index, "cat", "cats"),
        Err(LadderError::LengthMismatch { left: 3, right: 4 })
    ));
    assert!(matches!(
        min_path(&index, "cold", "warm"),
        Err(LadderError::IndexLengthMismatch { word: 4, index: 3 })
    ));
}

#[test]
fn searches_are_deterministic() {
    fn legacy(dictionary: &Dictionary) -> Option<Ladder> {
        let index = WordIndex::build(dictionary, 4);
        let (start, end) = (Word::new("cold").unwrap(), Word::new("warm").unwrap());
        LadderSearch::new(&index, SearchOptions::legacy())
            .min_path(&start, &end)
            .unwrap()
    }

    let dictionary = embedded();
    let first = min_path(&WordIndex::build(&dictionary, 4), "cold", "warm").unwrap();
    let second = min_path(&WordIndex::build(&dictionary, 4), "cold", "warm").unwrap();
    assert_eq!(first, second);

    assert_eq!(legacy(&dictionary), legacy(&dictionary));
}

#[test]
fn embedded_cold_to_warm() {
    let result = solve_ladder(SolveConfig::new("COLD", "warm"), &embedded()).unwrap();
    let ladder = result.ladder.unwrap();

    assert_eq!(ladder.start().text(), "cold");
    assert_eq!(ladder.end().text(), "warm");
    assert!(ladder.is_single_substitution_chain());
    assert!(ladder.steps() >= hamming("cold", "warm").unwrap());
}

#[test]
fn end_word_outside_dictionary_is_reachable() {
    let dictionary = words_from_slice(&["cat", "cot", "cog"]);
    let result = solve_ladder(SolveConfig::new("cat", "dog"), &dictionary).unwrap();
    assert_eq!(texts(&result.ladder.unwrap()), vec!["cat", "cot", "cog", "dog"]);
}

#[test]
fn index_is_shared_across_threads() {
    let dictionary = embedded();
    let index = WordIndex::build(&dictionary, 3);
    let search = LadderSearch::new(&index, SearchOptions::default());
    let expected = min_path(&index, "cat", "dog").unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let (start, end) = (Word::new("cat").unwrap(), Word::new("dog").unwrap());
                    search.min_path(&start, &end).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// Fewest substitutions from `start` to `end`, by breadth-first search
fn fewest_steps(index: &WordIndex, start: &Word, end: &Word) -> Option<usize> {
    let resolver = NeighborResolver::new(index, NeighborMode::Distinct);
    let mut depth: FxHashMap<&Word, usize> = FxHashMap::default();
    let mut queue = VecDeque::from([start]);
    depth.insert(start, 0);

    while let Some(word) = queue.pop_front() {
        let d = depth[word];
        if word == end {
            return Some(d);
        }
        for next in resolver.neighbors(word) {
            if !depth.contains_key(next) {
                depth.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn default_ladders_have_fewest_steps() {
    let dictionary = embedded();
    for length in [3, 4] {
        let index = WordIndex::build(&dictionary, length);
        let search = LadderSearch::new(&index, SearchOptions::default());
        let all: Vec<&Word> = index.words().collect();

        // Deterministic spread of pairs across the list
        for (i, start) in all.iter().enumerate().step_by(7) {
            let end = all[(i * 31 + 17) % all.len()];
            let ladder = search.min_path(start, end).unwrap();
            assert_eq!(
                ladder.as_ref().map(Ladder::steps),
                fewest_steps(&index, start, end),
                "{start} -> {end}"
            );
            if let Some(ladder) = ladder {
                assert!(ladder.is_single_substitution_chain());
            }
        }
    }
}

#[test]
fn embedded_mare_to_bowl_is_seven_steps() {
    let result = solve_ladder(SolveConfig::new("mare", "bowl"), &embedded()).unwrap();
    assert_eq!(result.ladder.unwrap().steps(), 7);
}
