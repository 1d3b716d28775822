//! Scoring throughput of the binary tag matrix.
//!
//! Run with `cargo bench tag_scoring`; reports land in target/criterion.

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use til_snippets::keywords::{
    KeywordSearch, MatchMode, Record, VectorizerConfig, VectorizerConfigBuilder, sample_records,
};

/// Synthetic bookmarks: each record draws 2-4 tags from a pool of `vocab` tags.
/// Built outside the timed section.
fn synthetic_records(size: usize, vocab: usize) -> Vec<Record> {
    (0..size)
        .map(|i| {
            let tag_count = 2 + i % 3;
            let tags = (0..tag_count)
                .map(|k| format!("tag{}", (i * 7 + k * 13) % vocab))
                .collect::<Vec<_>>();
            Record::new(format!("https://example.com/{i}"), tags)
        })
        .collect()
}

fn bench_sample_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_query");
    let records = sample_records().unwrap();

    for (name, case_fold) in [("case_sensitive", false), ("case_folded", true)] {
        let config = VectorizerConfigBuilder::new().case_fold(case_fold).build();
        let search = KeywordSearch::new(records.clone(), config, MatchMode::Overlap);
        group.bench_function(name, |b| {
            b.iter(|| black_box(search.run(black_box("caching, frontend")).unwrap()));
        });
    }

    group.bench_function("fit_and_run", |b| {
        b.iter(|| {
            let search = KeywordSearch::new(
                black_box(records.clone()),
                VectorizerConfig::default(),
                MatchMode::Overlap,
            );
            black_box(search.run("caching, frontend").unwrap())
        });
    });
    group.finish();
}

fn bench_corpus_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_scale");
    group.sample_size(20);
    group.sampling_mode(SamplingMode::Flat);

    for size in [1_000, 10_000, 50_000] {
        let search = KeywordSearch::new(
            synthetic_records(size, 500),
            VectorizerConfig::default(),
            MatchMode::Overlap,
        );
        group.bench_function(format!("ranked_size_{size}"), |b| {
            b.iter(|| black_box(search.ranked(black_box("tag1, tag42, tag99")).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample_query, bench_corpus_scale);
criterion_main!(benches);
