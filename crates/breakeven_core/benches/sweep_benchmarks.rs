//! Criterion benchmarks for breakeven_core evaluation and sweeps
//!
//! Run with: cargo bench -p breakeven_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use breakeven_core::aggregate::Aggregator;
use breakeven_core::analysis::{SweepConfig, sales_sweep};
use breakeven_core::config::ScenarioBuilder;
use breakeven_core::context::EvaluationContext;
use breakeven_core::expression::{Expression, evaluate};
use breakeven_core::model::{FormulaDraft, ParameterDraft};
use breakeven_core::state::{AppState, recompute};

fn create_scenario(extra_formulas: usize) -> AppState {
    let mut builder = ScenarioBuilder::new()
        .selling_price(42_000.0)
        .production(55_000.0)
        .sales_percent(90.0)
        .parameter(ParameterDraft::new("carbonTax", "150"));

    for i in 0..extra_formulas {
        let draft = FormulaDraft::new(
            format!("Deduction {i}"),
            format!("carbonTax * co2EmissionFactor * productionVolume / {}", i + 1),
        )
        .subtract_from_profit();
        builder = builder.formula(draft);
    }

    builder.build().unwrap()
}

fn bench_expression(c: &mut Criterion) {
    let state = create_scenario(0);
    let context = EvaluationContext::build(&state.inputs, &state.parameters);
    let source = "sellingPrice * salesVolume - (manufacturingCostPerTon * productionVolume \
                  + sellingPrice * (storageCostPercent / 100) * inventoryVolume)";
    let parsed = Expression::parse(source).unwrap();

    c.bench_function("parse_and_eval", |b| {
        b.iter(|| evaluate(black_box(source), black_box(&context)))
    });
    c.bench_function("eval_parsed", |b| {
        b.iter(|| parsed.eval(black_box(&context)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales_sweep");

    for formulas in [0, 10, 50].iter() {
        let state = create_scenario(*formulas);
        let context = EvaluationContext::build(&state.inputs, &state.parameters);
        let aggregator = Aggregator::new(&state.formulas);
        let config = SweepConfig::new(0, 100, 1).unwrap();

        group.bench_with_input(
            BenchmarkId::new("extra_formulas", formulas),
            formulas,
            |b, _| b.iter(|| sales_sweep(black_box(&aggregator), black_box(&context), &config)),
        );
    }

    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let state = create_scenario(10);

    c.bench_function("recompute_10_formulas", |b| {
        b.iter(|| recompute(black_box(&state)))
    });
}

criterion_group!(benches, bench_expression, bench_sweep, bench_recompute);
criterion_main!(benches);
