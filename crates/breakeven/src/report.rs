//! Text and JSON rendering of derived state

use breakeven_core::analysis::{SweepConfig, break_even_points};
use breakeven_core::constraints::ConstraintReport;
use breakeven_core::model::{AnalysisPoint, Evaluation, Headline, Limits};
use breakeven_core::state::{AppState, DerivedState};
use serde::Serialize;

use crate::util::format::{format_inr, format_number, format_percentage, format_with_unit};

// ============================================================================
// Report
// ============================================================================

/// One row of the results table. Failing formulas carry their error instead of a value;
/// `total-cost` and `net-profit` rows carry the profit-adjusted headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub id: String,
    pub name: String,
    pub value: Option<f64>,
    pub error: Option<String>,
    pub unit: String,
    pub subtract_from_profit: bool,
}

pub fn result_rows(evaluation: &Evaluation) -> Vec<ResultRow> {
    evaluation
        .results
        .iter()
        .map(|result| {
            let error = result.error().map(ToString::to_string);
            let value = match error {
                Some(_) => None,
                None => evaluation.display_value(result),
            };
            ResultRow {
                id: result.id.to_string(),
                name: result.name.clone(),
                value,
                error,
                unit: result.unit.clone(),
                subtract_from_profit: result.subtract_from_profit,
            }
        })
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportJson<'a> {
    state: &'a AppState,
    results: Vec<ResultRow>,
    profit_deductions: f64,
    headline: &'a Headline,
    constraints: &'a ConstraintReport,
    all_constraints_satisfied: bool,
    break_even: Vec<&'a AnalysisPoint>,
}

pub fn report_json(state: &AppState, derived: &DerivedState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportJson {
        state,
        results: result_rows(&derived.evaluation),
        profit_deductions: derived.evaluation.profit_deductions,
        headline: &derived.evaluation.headline,
        constraints: &derived.constraints,
        all_constraints_satisfied: derived.constraints.all_satisfied(),
        break_even: break_even_points(&derived.analysis),
    })
}

pub fn render_report(title: Option<&str>, state: &AppState, derived: &DerivedState) -> String {
    let mut lines = Vec::new();
    if let Some(title) = title {
        lines.push(format!("Scenario: {title}"));
        lines.push(String::new());
    }

    lines.push("Results".to_string());
    for row in result_rows(&derived.evaluation) {
        let name = if row.subtract_from_profit {
            format!("{} (deducted)", row.name)
        } else {
            row.name
        };
        let value = match (row.value, row.error) {
            (Some(value), _) => format_with_unit(value, &row.unit),
            (None, Some(error)) => format!("error: {error}"),
            (None, None) => "-".to_string(),
        };
        lines.push(format!("  {name:<36} {value:>22}"));
    }
    lines.push(format!(
        "  {:<36} {:>22}",
        "Profit deductions",
        format_inr(derived.evaluation.profit_deductions)
    ));

    lines.push(String::new());
    lines.push("Constraints".to_string());
    lines.extend(constraint_lines(&derived.constraints));

    lines.push(String::new());
    lines.push("Break-even".to_string());
    lines.extend(
        break_even_lines(&derived.analysis, &state.sweep)
            .into_iter()
            .map(|line| format!("  {line}")),
    );

    lines.join("\n")
}

fn constraint_lines(report: &ConstraintReport) -> Vec<String> {
    report
        .iter()
        .map(|(label, status)| {
            let verdict = if status.satisfied() { "OK" } else { "EXCEEDED" };
            format!(
                "  {label:<20} {:>14} / {:<14} {verdict}",
                format_number(status.current),
                format_number(status.limit),
            )
        })
        .collect()
}

/// Human-readable summary of the break-even crossings in a series
pub fn break_even_lines(series: &[AnalysisPoint], sweep: &SweepConfig) -> Vec<String> {
    if series.is_empty() {
        return vec!["no analysis: production volume is zero".to_string()];
    }

    let crossings = break_even_points(series);
    if crossings.is_empty() {
        let always_profitable = series.iter().all(|p| p.net_profit >= 0.0);
        let verdict = if always_profitable {
            "profitable"
        } else {
            "loss-making"
        };
        return vec![format!(
            "no break-even between {}% and {}% sales ({verdict} throughout)",
            sweep.start_percent(),
            sweep.end_percent()
        )];
    }

    crossings
        .into_iter()
        .map(|p| {
            format!(
                "break-even at ≈{} sales ({} tons sold, revenue {})",
                format_percentage(p.sales_percent),
                format_number(p.sales_volume),
                format_inr(p.revenue)
            )
        })
        .collect()
}

// ============================================================================
// Sweep
// ============================================================================

pub fn sweep_json(series: &[AnalysisPoint]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(series)
}

pub fn render_sweep(series: &[AnalysisPoint], sweep: &SweepConfig) -> String {
    if series.is_empty() {
        return "no analysis: production volume is zero".to_string();
    }

    let mut lines = vec![format!(
        "{:>8} {:>12} {:>12} {:>20} {:>20} {:>20}",
        "Sales %", "Sales t", "Inventory t", "Revenue", "Total cost", "Net profit"
    )];
    for point in series {
        let marker = if point.is_break_even { "  <- break-even" } else { "" };
        lines.push(format!(
            "{:>8} {:>12} {:>12} {:>20} {:>20} {:>20}{marker}",
            format_percentage(point.sales_percent),
            format_number(point.sales_volume),
            format_number(point.inventory_volume),
            format_inr(point.revenue),
            format_inr(point.total_cost),
            format_inr(point.net_profit),
        ));
    }
    lines.push(String::new());
    lines.extend(break_even_lines(series, sweep));
    lines.join("\n")
}

// ============================================================================
// Limits
// ============================================================================

pub fn render_limits(limits: &Limits) -> String {
    [
        ("Max production", limits.max_production, "tons"),
        ("Max sales", limits.max_sales, "tons"),
        ("Max inventory", limits.max_inventory, "tons"),
        ("Max CO2 emissions", limits.max_emissions, "tons CO2"),
    ]
    .iter()
    .map(|(label, value, unit)| format!("{label:<20} {}", format_with_unit(*value, unit)))
    .collect::<Vec<_>>()
    .join("\n")
}
