//! Sales-percentage sensitivity sweep

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::SweepConfig;
use super::interpolate::insert_break_even_points;
use crate::aggregate::Aggregator;
use crate::context::EvaluationContext;
use crate::model::{AnalysisPoint, FormulaRegistry};

/// Evaluate the headline at one sales percentage of `production_volume`
pub fn sample_point(
    aggregator: &Aggregator,
    base: &EvaluationContext,
    production_volume: f64,
    percent: u32,
) -> AnalysisPoint {
    let sales_percent = f64::from(percent);
    let sales_volume = production_volume * sales_percent / 100.0;
    let inventory_volume = production_volume - sales_volume;

    let context = base.with_volumes(sales_volume, inventory_volume);
    let headline = aggregator.evaluate_headline(&context);

    AnalysisPoint {
        sales_percent,
        sales_volume,
        inventory_volume,
        manufacturing_cost: headline.manufacturing_cost,
        sustainability_cost: headline.sustainability_cost,
        total_cost: headline.total_cost,
        revenue: headline.revenue,
        net_profit: headline.net_profit,
        total_emissions: headline.total_emissions,
        profit_positive: None,
        profit_negative: None,
        is_break_even: false,
    }
    .with_profit_split()
}

/// Raw samples over the configured range, without break-even points.
///
/// Empty when the context's production volume is not positive.
pub fn raw_sweep(
    aggregator: &Aggregator,
    base: &EvaluationContext,
    config: &SweepConfig,
) -> Vec<AnalysisPoint> {
    let production_volume = base.get("productionVolume").unwrap_or(0.0);
    if production_volume.is_nan() || production_volume <= 0.0 {
        debug!(production_volume, "Skipping sweep without production");
        return Vec::new();
    }

    let percentages: Vec<u32> = config.percentages().collect();

    #[cfg(feature = "parallel")]
    let iter = percentages.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = percentages.iter();

    iter.map(|&percent| sample_point(aggregator, base, production_volume, percent))
        .collect()
}

/// The full analysis series: raw samples in ascending order with an interpolated
/// break-even point inserted at every sign change of net profit.
pub fn sales_sweep(
    aggregator: &Aggregator,
    base: &EvaluationContext,
    config: &SweepConfig,
) -> Vec<AnalysisPoint> {
    let raw = raw_sweep(aggregator, base, config);
    let series = insert_break_even_points(raw);
    debug!(points = series.len(), "Sweep complete");
    series
}

/// Convenience wrapper compiling `registry` for a single sweep
pub fn sweep_registry(
    registry: &FormulaRegistry,
    base: &EvaluationContext,
    config: &SweepConfig,
) -> Vec<AnalysisPoint> {
    sales_sweep(&Aggregator::new(registry), base, config)
}
