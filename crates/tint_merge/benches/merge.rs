//! Class merge benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tint_merge::{cn, default_merger, MergeConfig, Merger};

const BUTTON: &str = "relative inline-flex items-center justify-center gap-2 rounded-xl text-sm font-medium transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-primary/50 focus:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 bg-primary text-white shadow-lg shadow-primary/20 hover:bg-primary/90 active:translate-y-0.5 active:shadow-sm backdrop-blur-sm h-12 px-6 text-base";

fn bench_merge(c: &mut Criterion) {
    let merger = default_merger();

    c.bench_function("merge_button_classes", |b| {
        b.iter(|| merger.merge(black_box(BUTTON)))
    });

    c.bench_function("merge_with_override", |b| {
        b.iter(|| {
            cn!(
                black_box(BUTTON),
                ("opacity-75 cursor-wait", black_box(true)),
                black_box("bg-black px-10 rounded-none")
            )
        })
    });

    c.bench_function("build_default_merger", |b| {
        b.iter(|| Merger::new(black_box(MergeConfig::default())))
    });
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
