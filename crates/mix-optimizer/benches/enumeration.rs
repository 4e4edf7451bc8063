use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mix_core::{MixConstraints, Objective, ShareCap, TinCatalog, TinKind};
use mix_optimizer::MixOptimizer;
use rust_decimal::Decimal;

fn bench_optimize(c: &mut Criterion) {
    let constraints = MixConstraints::new()
        .with_share_cap(ShareCap::new(TinKind::Grams125, Decimal::from(60)));
    let optimizer = MixOptimizer::new(
        TinCatalog::default(),
        constraints,
        Objective::FewestUnits,
        Decimal::from(8),
        10,
    );

    let mut group = c.benchmark_group("optimize");
    // 90 位賓客在 1/2/3 小時的預設需求
    for required in [540u64, 743, 945] {
        group.bench_with_input(BenchmarkId::from_parameter(required), &required, |b, &req| {
            b.iter(|| optimizer.optimize(black_box(req)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
