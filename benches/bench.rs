//! Criterion benchmarks for taxonomy loading and ancestor queries.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use wordnet::wordnet::WordNet;

/// Generate a balanced taxonomy where synset `i` is-a synset `i / fanout`,
/// plus a second parent for every seventh synset to create ties.
fn generate_taxonomy(count: u64, fanout: u64) -> (String, String) {
    let mut synsets = String::new();
    let mut hypernyms = String::new();
    for id in 0..count {
        writeln!(synsets, "id: {id} synset: word{id},term{}", id % 97).unwrap();
        if id == 0 {
            continue;
        }
        let parent = (id - 1) / fanout;
        if id % 7 == 0 && parent > 0 {
            writeln!(hypernyms, "from: {id} to: {parent},{}", parent - 1).unwrap();
        } else {
            writeln!(hypernyms, "from: {id} to: {parent}").unwrap();
        }
    }
    (synsets, hypernyms)
}

fn bench_load(c: &mut Criterion) {
    let (synsets, hypernyms) = generate_taxonomy(10_000, 4);
    let mut group = c.benchmark_group("load");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("load_10k", |b| {
        b.iter(|| {
            let mut wordnet = WordNet::new();
            black_box(wordnet.load(&synsets, &hypernyms).unwrap())
        })
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let (synsets, hypernyms) = generate_taxonomy(10_000, 4);
    let mut wordnet = WordNet::new();
    wordnet.load(&synsets, &hypernyms).unwrap();

    let mut group = c.benchmark_group("query");
    group.bench_function("bfs_leaf", |b| {
        b.iter(|| black_box(wordnet.hypernyms().graph().bfs(black_box(9_999))))
    });
    group.bench_function("lca_leaves", |b| {
        b.iter(|| black_box(wordnet.lca(black_box(9_999), black_box(5_003))))
    });
    group.bench_function("find_word", |b| {
        b.iter(|| black_box(wordnet.find(black_box("term42"))))
    });
    group.finish();
}

criterion_group!(benches, bench_load, bench_queries);
criterion_main!(benches);
