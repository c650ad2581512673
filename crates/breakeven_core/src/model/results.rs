//! Output types of evaluation and sensitivity analysis

use serde::{Deserialize, Serialize};

use super::{FormulaId, SeededFormula};
use crate::error::EvalError;

/// Outcome of evaluating one formula against one context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaResult {
    pub id: FormulaId,
    pub name: String,
    pub outcome: Result<f64, EvalError>,
    pub unit: String,
    pub subtract_from_profit: bool,
}

impl FormulaResult {
    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&EvalError> {
        self.outcome.as_ref().err()
    }
}

/// Dashboard totals derived from the seeded formulas.
///
/// A missing or failing seeded formula contributes zero. `total_cost` and `net_profit`
/// already include the profit deductions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub revenue: f64,
    pub manufacturing_cost: f64,
    pub storage_cost: f64,
    pub transportation_cost: f64,
    pub total_emissions: f64,
    pub sustainability_cost: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

/// Per-formula results plus the profit-adjusted headline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub results: Vec<FormulaResult>,
    /// Sum of all successful formulas flagged `subtract_from_profit`
    pub profit_deductions: f64,
    pub headline: Headline,
}

impl Evaluation {
    pub fn get(&self, id: &FormulaId) -> Option<&FormulaResult> {
        self.results.iter().find(|r| &r.id == id)
    }

    /// Raw value of a seeded formula, before any headline adjustment
    pub fn raw_value(&self, role: SeededFormula) -> Option<f64> {
        self.results
            .iter()
            .find(|r| r.id.as_str() == role.id())
            .and_then(FormulaResult::value)
    }

    /// The value presentation should show for a result row: the adjusted headline
    /// for `total-cost` and `net-profit`, the formula's own value otherwise.
    pub fn display_value(&self, result: &FormulaResult) -> Option<f64> {
        match SeededFormula::from_id(result.id.as_str()) {
            Some(SeededFormula::TotalCost) => Some(self.headline.total_cost),
            Some(SeededFormula::NetProfit) => Some(self.headline.net_profit),
            _ => result.value(),
        }
    }
}

/// One row of a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPoint {
    /// Sales as a percentage of production
    pub sales_percent: f64,
    pub sales_volume: f64,
    pub inventory_volume: f64,
    pub manufacturing_cost: f64,
    pub sustainability_cost: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub net_profit: f64,
    pub total_emissions: f64,
    /// `net_profit` when it is `>= 0`
    pub profit_positive: Option<f64>,
    /// `net_profit` when it is `< 0`
    pub profit_negative: Option<f64>,
    /// True for interpolated zero-crossing points
    pub is_break_even: bool,
}

impl AnalysisPoint {
    /// Fill the split fields from `net_profit`
    #[must_use]
    pub fn with_profit_split(mut self) -> Self {
        if self.net_profit >= 0.0 {
            self.profit_positive = Some(self.net_profit);
            self.profit_negative = None;
        } else {
            self.profit_positive = None;
            self.profit_negative = Some(self.net_profit);
        }
        self
    }
}
