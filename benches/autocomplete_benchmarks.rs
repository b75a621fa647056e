//! Autocomplete Benchmarks
//!
//! Criterion benchmarks for the prefix tree and the autocomplete layer.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use autocomplete_lib::config::CompletionConfig;
use autocomplete_lib::data_structures::{PrefixTree, SharedPrefixTree};
use autocomplete_lib::Autocompleter;
use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

/// Words sharing prefixes in a hierarchy: `prefix_{i}_key_{j}`.
fn hierarchical_words(groups: usize, per_group: usize) -> Vec<String> {
    (0..groups)
        .flat_map(|i| (0..per_group).map(move |j| format!("prefix_{i}_key_{j}")))
        .collect()
}

/// Benchmark the prefix tree
fn bench_prefix_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_tree");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Bulk insert with different word lengths
    for word_length in [8, 16, 32, 64].iter() {
        let words: Vec<String> = (0..1000)
            .map(|i| format!("{:0width$}", i, width = word_length))
            .collect();

        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(BenchmarkId::new("insert", word_length), &words, |b, words| {
            b.iter(|| {
                let tree: PrefixTree = words.iter().collect();
                black_box(tree.size())
            });
        });
    }

    let words = hierarchical_words(100, 10);
    let tree: PrefixTree = words.iter().collect();

    group.bench_function("contains", |b| {
        let mut index = 0;
        b.iter(|| {
            let word = &words[index % words.len()];
            index += 1;
            black_box(tree.contains(word))
        });
    });

    group.bench_function("words_with_prefix", |b| {
        let mut prefix_index = 0;
        b.iter(|| {
            let prefix = format!("prefix_{}_", prefix_index % 100);
            prefix_index += 1;
            black_box(tree.words_with_prefix(&prefix))
        });
    });

    group.bench_function("iter_prefix_first_five", |b| {
        b.iter(|| black_box(tree.iter_prefix("prefix_").take(5).count()));
    });

    group.finish();
}

/// Benchmark the locked wrapper and the validating front end
fn bench_autocompleter(c: &mut Criterion) {
    let mut group = c.benchmark_group("autocompleter");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    let words = hierarchical_words(100, 10);

    let shared = SharedPrefixTree::new();
    shared.insert_many(&words);
    group.bench_function("shared_suggest", |b| {
        b.iter(|| black_box(shared.suggest("prefix_4", 10)));
    });

    let completer = Autocompleter::from_config(&CompletionConfig {
        seed_words: words,
        ..CompletionConfig::default()
    })
    .expect("seed words are valid");
    group.bench_function("suggest", |b| {
        b.iter(|| black_box(completer.suggest("Prefix_4")));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_prefix_tree, bench_autocompleter
}

criterion_main!(benches);
