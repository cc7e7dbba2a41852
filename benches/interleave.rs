use criterion::{black_box, criterion_group, criterion_main, Criterion};

use array_ops::{merge, split, split_padded, MergeTail};

fn bench_interleave(c: &mut Criterion) {
    for n in [16usize, 1024] {
        let src: Vec<u64> = (0..n as u64).collect();
        let (even, odd) = split(&src);

        let mut group = c.benchmark_group(format!("Split / Merge ({n})"));
        group.bench_function("split", |b| b.iter(|| split(black_box(&src))));
        group.bench_function("split_padded", |b| {
            b.iter(|| split_padded(black_box(&src[1..]), 0))
        });
        group.bench_function("merge append", |b| {
            b.iter(|| merge(black_box(&even), black_box(&odd), MergeTail::Append))
        });
        group.bench_function("merge truncate (uneven)", |b| {
            b.iter(|| merge(black_box(&even), black_box(&odd[1..]), MergeTail::Truncate))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_interleave);
criterion_main!(benches);
