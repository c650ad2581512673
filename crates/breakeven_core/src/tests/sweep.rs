//! Tests for the sales-percentage sweep and break-even detection

use super::assert_close;
use crate::aggregate::Aggregator;
use crate::analysis::{SweepConfig, break_even_points, raw_sweep, sales_sweep, sweep_registry};
use crate::config::ScenarioBuilder;
use crate::context::EvaluationContext;
use crate::error::SweepConfigError;
use crate::model::{
    AnalysisPoint, FormulaDraft, FormulaRegistry, InputField, OperationalInputs, ParameterStore,
    SeededFormula,
};
use crate::state::recompute;

fn context_for(inputs: &OperationalInputs) -> EvaluationContext {
    EvaluationContext::build(inputs, &ParameterStore::new())
}

#[test]
fn test_default_sweep_is_ascending_with_one_crossing() {
    let inputs = OperationalInputs::default();
    let series = sweep_registry(
        &FormulaRegistry::seeded(),
        &context_for(&inputs),
        &SweepConfig::default(),
    );

    // 36 samples plus a single crossing between 94% and 95%
    assert_eq!(series.len(), 37);
    assert!(
        series
            .windows(2)
            .all(|w| w[0].sales_percent < w[1].sales_percent)
    );

    let crossings = break_even_points(&series);
    assert_eq!(crossings.len(), 1);
    let crossing = crossings[0];
    assert!(crossing.sales_percent > 94.0 && crossing.sales_percent < 95.0);
    assert_eq!(crossing.net_profit, 0.0);
    assert_eq!(crossing.profit_positive, Some(0.0));
    assert_eq!(crossing.profit_negative, None);

    // Net profit is linear in the sales share, so the chord root is exact
    assert_close(crossing.sales_percent, 1_928_950_000.0 / 20_350_000.0);
    assert_close(crossing.revenue, 20_000_000.0 * crossing.sales_percent);
}

#[test]
fn test_sweep_samples_match_headline_at_same_share() {
    let mut inputs = OperationalInputs::default();
    inputs.set(InputField::SalesVolumePercent, 80.0);
    let registry = FormulaRegistry::seeded();
    let aggregator = Aggregator::new(&registry);

    let series = raw_sweep(
        &aggregator,
        &context_for(&inputs),
        &SweepConfig::default(),
    );
    let at_80 = series.iter().find(|p| p.sales_percent == 80.0).unwrap();

    let headline = aggregator.evaluate(&context_for(&inputs)).headline;
    assert_close(at_80.net_profit, headline.net_profit);
    assert_close(at_80.revenue, headline.revenue);
    assert_close(at_80.sales_volume, 40_000.0);
    assert_close(at_80.inventory_volume, 10_000.0);
    assert!(at_80.profit_negative.is_some());
    assert!(!at_80.is_break_even);
}

#[test]
fn test_crossing_between_seventy_and_seventy_one() {
    // Net profit is -100 at 70% and +50 at 71% of a 100 ton production
    let state = ScenarioBuilder::new()
        .production(100.0)
        .override_formula(SeededFormula::NetProfit, "150 * salesVolume - 10600")
        .build()
        .unwrap();
    let derived = recompute(&state);

    let at = |percent: f64| {
        derived
            .analysis
            .iter()
            .find(|p| !p.is_break_even && p.sales_percent == percent)
            .unwrap()
            .net_profit
    };
    assert_close(at(70.0), -100.0);
    assert_close(at(71.0), 50.0);

    let crossings = break_even_points(&derived.analysis);
    assert_eq!(crossings.len(), 1);
    assert_close(crossings[0].sales_percent, 70.0 + 2.0 / 3.0);
    assert_close(crossings[0].sales_volume, 70.0 + 2.0 / 3.0);

    // The crossing sits between its neighbours in the series
    let index = derived
        .analysis
        .iter()
        .position(|p| p.is_break_even)
        .unwrap();
    assert_eq!(derived.analysis[index - 1].sales_percent, 70.0);
    assert_eq!(derived.analysis[index + 1].sales_percent, 71.0);
}

#[test]
fn test_sweep_includes_profit_deductions() {
    let plain = ScenarioBuilder::new().build().unwrap();
    let deducted = ScenarioBuilder::new()
        .formula(FormulaDraft::new("Fixed Overhead", "1000000").subtract_from_profit())
        .build()
        .unwrap();

    let plain = recompute(&plain).analysis;
    let deducted = recompute(&deducted).analysis;
    let sample = |series: &[AnalysisPoint]| {
        *series
            .iter()
            .find(|p| p.sales_percent == 100.0)
            .unwrap()
    };

    assert_close(
        sample(&deducted).net_profit,
        sample(&plain).net_profit - 1_000_000.0,
    );
    assert_close(
        sample(&deducted).total_cost,
        sample(&plain).total_cost + 1_000_000.0,
    );
}

#[test]
fn test_zero_production_gives_empty_sweep() {
    let mut inputs = OperationalInputs::default();
    inputs.set(InputField::ProductionVolume, 0.0);

    let series = sweep_registry(
        &FormulaRegistry::seeded(),
        &context_for(&inputs),
        &SweepConfig::default(),
    );
    assert!(series.is_empty());
}

#[test]
fn test_custom_sweep_range() {
    let config = SweepConfig::new(0, 100, 10).unwrap();
    assert_eq!(config.point_count(), 11);

    let series = sales_sweep(
        &Aggregator::new(&FormulaRegistry::seeded()),
        &context_for(&OperationalInputs::default()),
        &config,
    );
    let samples: Vec<f64> = series
        .iter()
        .filter(|p| !p.is_break_even)
        .map(|p| p.sales_percent)
        .collect();
    assert_eq!(samples.first(), Some(&0.0));
    assert_eq!(samples.last(), Some(&100.0));
    assert_eq!(samples.len(), 11);
    assert_eq!(break_even_points(&series).len(), 1);

    assert_eq!(SweepConfig::new(10, 20, 0), Err(SweepConfigError::ZeroStep));
    assert_eq!(
        SweepConfig::new(90, 80, 1),
        Err(SweepConfigError::InvertedRange { start: 90, end: 80 })
    );
}

#[test]
fn test_all_negative_series_has_no_crossing() {
    let state = ScenarioBuilder::new()
        .selling_price(10_000.0)
        .build()
        .unwrap();
    let derived = recompute(&state);

    assert_eq!(derived.analysis.len(), 36);
    assert!(break_even_points(&derived.analysis).is_empty());
    assert!(derived.analysis.iter().all(|p| p.profit_negative.is_some()));
}
