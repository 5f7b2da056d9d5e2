//! Criterion benchmarks for dual_payoff table assembly.
//!
//! Measures single-cell evaluation and full table construction across sweep
//! sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dual_core::types::{AccrualUnit, ReportingMode, SettlementVariant};
use dual_payoff::{
    build_return_table, compute_return_rate, compute_return_rate_high_sell, Holding, PriceSweep,
    Strategy,
};

/// Generate `n` strategies with targets spread around 99,000.
fn generate_strategies(n: usize) -> Vec<Strategy> {
    (0..n)
        .map(|i| {
            let target = 97_000.0 + 250.0 * i as f64;
            Strategy::from_apr_percent(format!("{}", target), target, 100.0 + 10.0 * i as f64)
        })
        .collect()
}

/// Benchmark the single-cell formulas.
fn bench_cell_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_formulas");

    group.bench_function("buy_low", |b| {
        b.iter(|| {
            compute_return_rate(
                black_box(10_000.0_f64),
                black_box(98_000.0),
                black_box(99_000.0),
                black_box(225.75),
            )
        });
    });

    group.bench_function("sell_high", |b| {
        b.iter(|| {
            compute_return_rate_high_sell(
                black_box(1.0_f64),
                black_box(1.01),
                black_box(1.005),
                black_box(0.0056),
            )
        });
    });

    group.finish();
}

/// Benchmark full table construction.
fn bench_build_return_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_return_table");
    let holding = Holding::new(10_000.0, 4.0, AccrualUnit::Days);

    for size in [100, 1_000, 10_000] {
        let sweep = PriceSweep::arange(95_000.0, 105_000.0, 10_000.0 / size as f64).unwrap();
        let strategies = generate_strategies(8);

        group.bench_with_input(
            BenchmarkId::new("percentage", size),
            &(&sweep, &strategies),
            |b, (sweep, strategies)| {
                b.iter(|| {
                    build_return_table(
                        black_box(sweep),
                        black_box(strategies),
                        &holding,
                        ReportingMode::Percentage,
                    )
                    .unwrap()
                });
            },
        );
    }

    let sweep = PriceSweep::arange(0.9, 1.1, 0.0001).unwrap();
    let strategies: Vec<Strategy> = generate_strategies(8)
        .into_iter()
        .map(|s| s.with_variant(SettlementVariant::SellHigh))
        .collect();
    group.bench_function("sell_high_absolute", |b| {
        b.iter(|| {
            build_return_table(
                black_box(&sweep),
                black_box(&strategies),
                &holding,
                ReportingMode::Absolute,
            )
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cell_formulas, bench_build_return_table);
criterion_main!(benches);
