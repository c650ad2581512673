//! Application state and explicit recomputation.
//!
//! [`AppState`] is the single owned aggregate of everything the user can edit.
//! [`recompute`] is a pure function from it to every derived value. [`Session`] pairs
//! the two and re-runs `recompute` after each successful mutation; a rejected
//! mutation changes nothing.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::Aggregator;
use crate::analysis::{SweepConfig, sales_sweep};
use crate::constraints::{self, ConstraintReport};
use crate::context::EvaluationContext;
use crate::error::{FormulaError, ParameterError};
use crate::model::{
    AnalysisPoint, Evaluation, FormulaDraft, FormulaId, FormulaRegistry, InputField, Limits,
    OperationalInputs, Parameter, ParameterDraft, ParameterId, ParameterStore,
};

/// Everything the user edits
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub inputs: OperationalInputs,
    pub parameters: ParameterStore,
    pub formulas: FormulaRegistry,
    pub limits: Limits,
    pub sweep: SweepConfig,
}

/// Everything computed from an [`AppState`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedState {
    pub context: EvaluationContext,
    pub evaluation: Evaluation,
    pub constraints: ConstraintReport,
    pub analysis: Vec<AnalysisPoint>,
}

/// Rebuild context, results, constraint report and analysis series from scratch
pub fn recompute(state: &AppState) -> DerivedState {
    let context = EvaluationContext::build(&state.inputs, &state.parameters);
    let aggregator = Aggregator::new(&state.formulas);
    let evaluation = aggregator.evaluate(&context);
    let constraints = constraints::check(
        &state.inputs,
        evaluation.headline.total_emissions,
        &state.limits,
    );
    let analysis = sales_sweep(&aggregator, &context, &state.sweep);

    debug!(
        formulas = evaluation.results.len(),
        analysis_points = analysis.len(),
        "Recomputed derived state"
    );

    DerivedState {
        context,
        evaluation,
        constraints,
        analysis,
    }
}

/// An [`AppState`] kept in step with its [`DerivedState`]
#[derive(Debug, Clone)]
pub struct Session {
    state: AppState,
    derived: DerivedState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let derived = recompute(&state);
        Self { state, derived }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    fn refresh(&mut self) {
        self.derived = recompute(&self.state);
    }

    // =========================================================================
    // Builtin inputs and limits
    // =========================================================================

    pub fn set_input(&mut self, field: InputField, value: f64) {
        self.state.inputs.set(field, value);
        self.refresh();
    }

    /// Apply raw text to a builtin field; rejected text leaves everything untouched
    pub fn set_input_text(&mut self, field: InputField, text: &str) -> bool {
        let accepted = self.state.inputs.set_text(field, text);
        if accepted {
            self.refresh();
        }
        accepted
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.state.limits = limits;
        self.refresh();
    }

    pub fn set_sweep(&mut self, sweep: SweepConfig) {
        self.state.sweep = sweep;
        self.refresh();
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    pub fn add_parameter(&mut self, draft: ParameterDraft) -> Result<ParameterId, ParameterError> {
        let id = self.state.parameters.add(draft)?;
        self.refresh();
        Ok(id)
    }

    pub fn edit_parameter(
        &mut self,
        id: ParameterId,
        draft: ParameterDraft,
    ) -> Result<(), ParameterError> {
        self.state.parameters.edit(id, draft)?;
        self.refresh();
        Ok(())
    }

    pub fn remove_parameter(&mut self, id: ParameterId) -> Result<Parameter, ParameterError> {
        let removed = self.state.parameters.remove(id)?;
        self.refresh();
        Ok(removed)
    }

    pub fn set_parameter_value(&mut self, id: ParameterId, text: &str) -> bool {
        let accepted = self.state.parameters.set_value(id, text);
        if accepted {
            self.refresh();
        }
        accepted
    }

    // =========================================================================
    // Formulas
    // =========================================================================

    pub fn add_formula(&mut self, draft: FormulaDraft) -> Result<FormulaId, FormulaError> {
        let id = self.state.formulas.add(draft)?;
        self.refresh();
        Ok(id)
    }

    pub fn edit_formula(&mut self, id: &FormulaId, draft: FormulaDraft) -> Result<(), FormulaError> {
        self.state.formulas.edit(id, draft)?;
        self.refresh();
        Ok(())
    }

    pub fn remove_formula(&mut self, id: &FormulaId) -> Result<(), FormulaError> {
        self.state.formulas.remove(id)?;
        self.refresh();
        Ok(())
    }
}
