use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexcol::column::string_column::StringColumn;
use lexcol::core::config::ScanPolicy;
use lexcol::core::types::{FieldValue, FilterOp};
use lexcol::pool::string_pool::StringPool;

const WORDS: &[&str] = &[
    "alpha", "apple", "avocado", "banana", "beta", "cherry", "delta", "echo", "fig", "grape",
    "kiwi", "lemon", "mango", "nectar", "olive", "peach", "quince", "raspberry", "sigma", "zeta",
];

// Helper to build a column of `rows` rows cycling through the word list.
fn build_column(rows: usize, sorted: bool) -> (StringPool, StringColumn) {
    let mut pool = StringPool::new();
    let mut texts: Vec<&str> = (0..rows).map(|i| WORDS[i % WORDS.len()]).collect();
    if sorted {
        texts.sort();
    }
    let texts: Vec<Option<&str>> = texts.into_iter().map(Some).collect();
    let col = StringColumn::from_texts(&mut pool, &texts, sorted);
    (pool, col)
}

fn bench_eq_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("eq_search");
    for rows in [10_000usize, 100_000] {
        let (pool, scanned) = build_column(rows, false);
        let (sorted_pool, sorted) = build_column(rows, true);
        let value = FieldValue::text("mango");
        group.bench_with_input(BenchmarkId::new("scan", rows), &rows, |b, _| {
            b.iter(|| {
                let sel = scanned
                    .search(&pool, FilterOp::Eq, black_box(&value), scanned.full_range())
                    .unwrap();
                black_box(sel.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("binary", rows), &rows, |b, _| {
            b.iter(|| {
                let sel = sorted
                    .search(
                        &sorted_pool,
                        FilterOp::Eq,
                        black_box(&value),
                        sorted.full_range(),
                    )
                    .unwrap();
                black_box(sel.len())
            })
        });
    }
    group.finish();
}

fn bench_glob_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("glob_search");
    let rows = 100_000usize;
    let (pool, precomputed) = build_column(rows, false);
    let direct = StringColumn::new(precomputed.values().to_vec(), false).with_policy(ScanPolicy {
        pattern_precompute: false,
    });
    let value = FieldValue::text("*an*");
    group.bench_function(BenchmarkId::new("precomputed", rows), |b| {
        b.iter(|| {
            let sel = precomputed
                .search(
                    &pool,
                    FilterOp::Glob,
                    black_box(&value),
                    precomputed.full_range(),
                )
                .unwrap();
            black_box(sel.len())
        })
    });
    group.bench_function(BenchmarkId::new("direct", rows), |b| {
        b.iter(|| {
            let sel = direct
                .search(&pool, FilterOp::Glob, black_box(&value), direct.full_range())
                .unwrap();
            black_box(sel.len())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_eq_search, bench_glob_strategies);
criterion_main!(benches);
