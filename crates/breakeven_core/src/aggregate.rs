//! Per-formula evaluation and the profit-deduction rule.
//!
//! Every formula is evaluated in isolation against the same context; no formula can
//! see another's result. The only structure layered on top is the headline: the
//! `total-cost` and `net-profit` values are adjusted by the sum of all formulas flagged
//! `subtract_from_profit`.

use crate::context::EvaluationContext;
use crate::error::EvalError;
use crate::expression::Expression;
use crate::model::{
    Evaluation, FormulaId, FormulaRegistry, FormulaResult, Headline, SeededFormula,
};

struct CompiledFormula {
    id: FormulaId,
    name: String,
    unit: String,
    subtract_from_profit: bool,
    role: Option<SeededFormula>,
    expression: Result<Expression, EvalError>,
}

/// A registry snapshot with every expression parsed once, so the same formulas can be
/// evaluated cheaply against many contexts (one per sweep point).
pub struct Aggregator {
    formulas: Vec<CompiledFormula>,
}

impl Aggregator {
    #[must_use]
    pub fn new(registry: &FormulaRegistry) -> Self {
        let formulas = registry
            .iter()
            .map(|formula| CompiledFormula {
                id: formula.id.clone(),
                name: formula.name.clone(),
                unit: formula.unit.clone(),
                subtract_from_profit: formula.subtract_from_profit,
                role: formula.seeded(),
                expression: Expression::parse(&formula.expression),
            })
            .collect();
        Self { formulas }
    }

    /// Evaluate every formula and derive the headline
    pub fn evaluate(&self, context: &EvaluationContext) -> Evaluation {
        let results: Vec<FormulaResult> = self
            .formulas
            .iter()
            .map(|formula| FormulaResult {
                id: formula.id.clone(),
                name: formula.name.clone(),
                outcome: formula
                    .expression
                    .as_ref()
                    .map_err(Clone::clone)
                    .and_then(|expr| expr.eval(context)),
                unit: formula.unit.clone(),
                subtract_from_profit: formula.subtract_from_profit,
            })
            .collect();

        let profit_deductions = results
            .iter()
            .filter(|r| r.subtract_from_profit)
            .filter_map(FormulaResult::value)
            .sum();

        let headline = self.headline(&results, profit_deductions);

        Evaluation {
            results,
            profit_deductions,
            headline,
        }
    }

    /// Evaluate only what the headline needs: the seeded formulas and the deductions
    pub fn evaluate_headline(&self, context: &EvaluationContext) -> Headline {
        let mut values = [None; SeededFormula::ALL.len()];
        let mut profit_deductions = 0.0;

        for formula in &self.formulas {
            if formula.role.is_none() && !formula.subtract_from_profit {
                continue;
            }
            let Ok(value) = formula
                .expression
                .as_ref()
                .map_err(Clone::clone)
                .and_then(|expr| expr.eval(context))
            else {
                continue;
            };
            if formula.subtract_from_profit {
                profit_deductions += value;
            }
            if let Some(role) = formula.role {
                values[role as usize].get_or_insert(value);
            }
        }

        assemble_headline(|role| values[role as usize], profit_deductions)
    }

    fn headline(&self, results: &[FormulaResult], profit_deductions: f64) -> Headline {
        let value_of = |role: SeededFormula| {
            self.formulas
                .iter()
                .zip(results)
                .find(|(formula, _)| formula.role == Some(role))
                .and_then(|(_, result)| result.value())
        };
        assemble_headline(value_of, profit_deductions)
    }
}

fn assemble_headline(
    value_of: impl Fn(SeededFormula) -> Option<f64>,
    profit_deductions: f64,
) -> Headline {
    let value = |role| value_of(role).unwrap_or(0.0);
    Headline {
        revenue: value(SeededFormula::Revenue),
        manufacturing_cost: value(SeededFormula::ManufacturingCost),
        storage_cost: value(SeededFormula::StorageCost),
        transportation_cost: value(SeededFormula::TransportationCost),
        total_emissions: value(SeededFormula::Emissions),
        sustainability_cost: value(SeededFormula::SustainabilityCost),
        total_cost: value(SeededFormula::TotalCost) + profit_deductions,
        net_profit: value(SeededFormula::NetProfit) - profit_deductions,
    }
}

/// Evaluate a whole registry against one context
pub fn evaluate_all(registry: &FormulaRegistry, context: &EvaluationContext) -> Evaluation {
    Aggregator::new(registry).evaluate(context)
}
