//! Tests for the Builder DSL, recomputation and session mutations

use super::assert_close;
use crate::analysis::SweepConfig;
use crate::config::ScenarioBuilder;
use crate::error::{FormulaError, ParameterError, ScenarioError, SweepConfigError};
use crate::model::{
    FormulaDraft, FormulaId, InputField, Limits, ParameterDraft, SeededFormula,
};
use crate::state::{AppState, Session, recompute};

// ============================================================================
// Builder DSL
// ============================================================================

#[test]
fn test_builder_defaults_match_default_state() {
    let built = ScenarioBuilder::new().build().unwrap();
    assert_eq!(built, AppState::default());
}

#[test]
fn test_builder_applies_inputs_in_order() {
    let state = ScenarioBuilder::new()
        .selling_price(42_000.0)
        .sales_percent(80.0)
        .production(10_000.0)
        .co2_emission_factor(2.0)
        .build()
        .unwrap();

    assert_eq!(state.inputs.selling_price, 42_000.0);
    assert_eq!(state.inputs.production_volume, 10_000.0);
    assert_close(state.inputs.sales_volume, 8_000.0);
    assert_close(state.inputs.inventory_volume, 2_000.0);
    assert_eq!(state.inputs.co2_emission_factor, 2.0);
}

#[test]
fn test_builder_rejects_invalid_input_text() {
    let result = ScenarioBuilder::new()
        .input_text(InputField::SellingPrice, "40,000")
        .build();
    assert_eq!(
        result,
        Err(ScenarioError::InvalidInput {
            field: InputField::SellingPrice.label(),
            text: "40,000".into(),
        })
    );

    let state = ScenarioBuilder::new()
        .input_text(InputField::StorageCostPercent, "2.5")
        .build()
        .unwrap();
    assert_eq!(state.inputs.storage_cost_percent, 2.5);
}

#[test]
fn test_builder_validates_parameters_and_formulas() {
    let reserved = ScenarioBuilder::new()
        .parameter(ParameterDraft::new("productionVolume", "1"))
        .build();
    assert_eq!(
        reserved,
        Err(ScenarioError::Parameter(ParameterError::ReservedName(
            "productionVolume".into()
        )))
    );

    let broken = ScenarioBuilder::new()
        .formula(FormulaDraft::new("Broken", "2 *"))
        .build();
    assert!(matches!(
        broken,
        Err(ScenarioError::Formula(FormulaError::InvalidExpression { .. }))
    ));

    let removed_twice = ScenarioBuilder::new()
        .without_formula(SeededFormula::Emissions)
        .override_formula(SeededFormula::Emissions, "1")
        .build();
    assert_eq!(
        removed_twice,
        Err(ScenarioError::Formula(FormulaError::NotFound(
            FormulaId::from(SeededFormula::Emissions)
        )))
    );

    let inverted = ScenarioBuilder::new().sweep_range(90, 70, 1).build();
    assert_eq!(
        inverted,
        Err(ScenarioError::Sweep(SweepConfigError::InvertedRange {
            start: 90,
            end: 70
        }))
    );
}

#[test]
fn test_builder_override_keeps_formula_metadata() {
    let state = ScenarioBuilder::new()
        .override_formula(SeededFormula::Revenue, "sellingPrice * salesVolume * 2")
        .build()
        .unwrap();

    let revenue = state.formulas.get_seeded(SeededFormula::Revenue).unwrap();
    assert_eq!(revenue.name, "Total Revenue");
    assert_eq!(revenue.unit, "INR");
    assert_eq!(revenue.expression, "sellingPrice * salesVolume * 2");

    let derived = recompute(&state);
    assert_close(derived.evaluation.headline.revenue, 4_000_000_000.0);
}

#[test]
fn test_builder_without_seeded_formulas() {
    let state = ScenarioBuilder::new()
        .without_seeded_formulas()
        .formula(FormulaDraft::new("Margin", "sellingPrice - manufacturingCostPerTon"))
        .build()
        .unwrap();
    assert_eq!(state.formulas.len(), 1);

    let derived = recompute(&state);
    assert_eq!(derived.evaluation.headline.revenue, 0.0);
    assert_eq!(derived.evaluation.headline.net_profit, 0.0);
    assert_eq!(derived.evaluation.results[0].value(), Some(3_400.0));
    // A flat zero profit never changes sign
    assert!(derived.analysis.iter().all(|p| !p.is_break_even));
}

// ============================================================================
// Recompute and constraints
// ============================================================================

#[test]
fn test_recompute_is_pure() {
    let state = ScenarioBuilder::new()
        .parameter(ParameterDraft::new("royalty", "2"))
        .formula(FormulaDraft::new("Royalty", "royalty * salesVolume").subtract_from_profit())
        .build()
        .unwrap();
    assert_eq!(recompute(&state), recompute(&state));
}

#[test]
fn test_constraints_follow_limits() {
    let session = ScenarioBuilder::new()
        .production(70_000.0)
        .max_emissions(200_000.0)
        .build_session()
        .unwrap();
    let report = session.derived().constraints;

    assert!(!report.production.satisfied());
    assert!(!report.sales.satisfied());
    assert!(report.inventory.satisfied());
    assert_close(report.emissions.current, 177_100.0);
    assert!(report.emissions.satisfied());
    assert!(!report.all_satisfied());
}

// ============================================================================
// Session mutations
// ============================================================================

#[test]
fn test_session_refreshes_after_input_edit() {
    let mut session = Session::default();
    let before = session.derived().evaluation.headline.revenue;

    session.set_input(InputField::SellingPrice, 41_000.0);
    let after = session.derived().evaluation.headline.revenue;
    assert_close(after, before / 40_000.0 * 41_000.0);
}

#[test]
fn test_session_refreshes_after_sweep_change() {
    let mut session = Session::default();
    assert_eq!(session.derived().analysis.len(), 37);

    session.set_sweep(SweepConfig::new(0, 100, 10).unwrap());
    let analysis = &session.derived().analysis;
    let samples = analysis.iter().filter(|p| !p.is_break_even).count();
    assert_eq!(samples, 11);
    assert_eq!(analysis.len(), 12);
    assert_eq!(session.state().sweep.step_percent(), 10);
}

#[test]
fn test_rejected_mutations_change_nothing() {
    let mut session = Session::default();
    let snapshot = session.derived().clone();

    assert!(!session.set_input_text(InputField::ProductionVolume, "abc"));
    assert!(
        session
            .add_parameter(ParameterDraft::new("sellingPrice", "1"))
            .is_err()
    );
    assert!(
        session
            .add_formula(FormulaDraft::new("Broken", "(("))
            .is_err()
    );
    assert!(
        session
            .remove_formula(&FormulaId("formula-404".into()))
            .is_err()
    );

    assert_eq!(session.derived(), &snapshot);
    assert_eq!(session.state(), &AppState::default());
}

#[test]
fn test_parameter_edits_flow_into_deductions() {
    let mut session = Session::default();
    let id = session
        .add_parameter(ParameterDraft::new("overhead", "1000"))
        .unwrap();
    let formula = session
        .add_formula(FormulaDraft::new("Overhead", "overhead").subtract_from_profit())
        .unwrap();
    assert_eq!(session.derived().evaluation.profit_deductions, 1_000.0);

    assert!(session.set_parameter_value(id, "2500"));
    assert_eq!(session.derived().evaluation.profit_deductions, 2_500.0);

    session.remove_parameter(id).unwrap();
    let result = session.derived().evaluation.get(&formula).unwrap();
    assert!(result.error().is_some());
    assert_eq!(session.derived().evaluation.profit_deductions, 0.0);
}

#[test]
fn test_removing_total_cost_zeroes_its_headline() {
    let mut session = Session::default();
    session
        .remove_formula(&FormulaId::from(SeededFormula::TotalCost))
        .unwrap();
    assert_eq!(session.derived().evaluation.headline.total_cost, 0.0);

    session.set_limits(Limits {
        max_production: 1.0,
        ..Default::default()
    });
    assert!(!session.derived().constraints.production.satisfied());
}

#[test]
fn test_edit_formula_in_session() {
    let mut session = Session::default();
    let id = session
        .add_formula(FormulaDraft::new("Fixed", "100"))
        .unwrap();
    session
        .edit_formula(&id, FormulaDraft::new("Fixed", "200").subtract_from_profit())
        .unwrap();

    let evaluation = &session.derived().evaluation;
    assert_eq!(evaluation.get(&id).unwrap().value(), Some(200.0));
    assert_eq!(evaluation.profit_deductions, 200.0);
    assert_eq!(session.state().formulas.get(&id).unwrap().name, "Fixed");
}
