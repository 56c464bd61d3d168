//! Benchmarks for index construction and ladder search on the embedded
//! dictionary.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use word_ladder::core::Word;
use word_ladder::graph::WordIndex;
use word_ladder::solver::{LadderSearch, SearchOptions};
use word_ladder::wordlists::loader::embedded;

/// Builds the pattern index for all four-letter words.
fn bench_index_build(c: &mut Criterion) {
    let dictionary = embedded();

    c.bench_function("index_build_4", |b| {
        b.iter(|| {
            let index = WordIndex::build(black_box(&dictionary), 4);
            assert!(!index.is_empty());
        });
    });
}

/// Measures one search under each option set on a prebuilt index.
///
/// Index construction is excluded.
fn bench_cold_to_warm(c: &mut Criterion) {
    let dictionary = embedded();
    let index = WordIndex::build(&dictionary, 4);
    let (Ok(start), Ok(end)) = (Word::new("cold"), Word::new("warm")) else {
        return;
    };

    for (name, options) in [
        ("search_cold_warm_default", SearchOptions::default()),
        ("search_cold_warm_legacy", SearchOptions::legacy()),
    ] {
        let search = LadderSearch::new(&index, options);
        c.bench_function(name, |b| {
            b.iter(|| search.min_path(black_box(&start), black_box(&end)));
        });
    }
}

/// Worst case for a three-letter query: the whole component is explored.
fn bench_unreachable(c: &mut Criterion) {
    let dictionary = embedded();
    let index = WordIndex::build(&dictionary, 3);
    let search = LadderSearch::new(&index, SearchOptions::default());
    let (Ok(start), Ok(end)) = (Word::new("cat"), Word::new("zzz")) else {
        return;
    };

    c.bench_function("search_cat_unindexed_end", |b| {
        b.iter(|| search.search(black_box(&start), black_box(&end)));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_index_build, bench_cold_to_warm, bench_unreachable
);
criterion_main!(benches);
