//! Scenario Builder
//!
//! Fluent construction of an [`AppState`]. Nothing is validated until [`ScenarioBuilder::build`],
//! which applies each pending edit in the order it was given.

use crate::analysis::SweepConfig;
use crate::error::{FormulaError, ScenarioError};
use crate::model::{
    FormulaDraft, FormulaId, FormulaRegistry, InputField, Limits, OperationalInputs,
    ParameterDraft, ParameterStore, SeededFormula,
};
use crate::state::{AppState, Session};

#[derive(Debug, Clone)]
enum PendingInput {
    Value(InputField, f64),
    Text(InputField, String),
}

#[derive(Debug, Clone)]
enum PendingFormula {
    Add(FormulaDraft),
    Replace(SeededFormula, String),
    Remove(SeededFormula),
}

/// Builder for scenarios with deferred validation
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    inputs: Vec<PendingInput>,
    parameters: Vec<ParameterDraft>,
    formulas: Vec<PendingFormula>,
    seeded: bool,
    limits: Limits,
    sweep: Option<(u32, u32, u32)>,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Start from the default inputs, the seeded formulas and the default limits
    #[must_use]
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            parameters: Vec::new(),
            formulas: Vec::new(),
            seeded: true,
            limits: Limits::default(),
            sweep: None,
        }
    }

    // =========================================================================
    // Builtin inputs
    // =========================================================================

    /// Set any builtin field; linked volume rules apply in call order
    #[must_use]
    pub fn input(mut self, field: InputField, value: f64) -> Self {
        self.inputs.push(PendingInput::Value(field, value));
        self
    }

    /// Set a builtin field from raw text, validated at build time
    #[must_use]
    pub fn input_text(mut self, field: InputField, text: impl Into<String>) -> Self {
        self.inputs.push(PendingInput::Text(field, text.into()));
        self
    }

    #[must_use]
    pub fn selling_price(self, value: f64) -> Self {
        self.input(InputField::SellingPrice, value)
    }

    #[must_use]
    pub fn manufacturing_cost_per_ton(self, value: f64) -> Self {
        self.input(InputField::ManufacturingCostPerTon, value)
    }

    #[must_use]
    pub fn storage_cost_percent(self, value: f64) -> Self {
        self.input(InputField::StorageCostPercent, value)
    }

    #[must_use]
    pub fn transportation_cost_percent(self, value: f64) -> Self {
        self.input(InputField::TransportationCostPercent, value)
    }

    #[must_use]
    pub fn sustainability_cost_per_ton_co2(self, value: f64) -> Self {
        self.input(InputField::SustainabilityCostPerTonCo2, value)
    }

    #[must_use]
    pub fn co2_emission_factor(self, value: f64) -> Self {
        self.input(InputField::Co2EmissionFactor, value)
    }

    #[must_use]
    pub fn production(self, tons: f64) -> Self {
        self.input(InputField::ProductionVolume, tons)
    }

    #[must_use]
    pub fn sales(self, tons: f64) -> Self {
        self.input(InputField::SalesVolume, tons)
    }

    #[must_use]
    pub fn sales_percent(self, percent: f64) -> Self {
        self.input(InputField::SalesVolumePercent, percent)
    }

    #[must_use]
    pub fn inventory(self, tons: f64) -> Self {
        self.input(InputField::InventoryVolume, tons)
    }

    // =========================================================================
    // Parameters and formulas
    // =========================================================================

    #[must_use]
    pub fn parameter(mut self, draft: ParameterDraft) -> Self {
        self.parameters.push(draft);
        self
    }

    #[must_use]
    pub fn formula(mut self, draft: FormulaDraft) -> Self {
        self.formulas.push(PendingFormula::Add(draft));
        self
    }

    /// Replace the expression of a seeded formula, keeping its name and flags
    #[must_use]
    pub fn override_formula(mut self, role: SeededFormula, expression: impl Into<String>) -> Self {
        self.formulas
            .push(PendingFormula::Replace(role, expression.into()));
        self
    }

    #[must_use]
    pub fn without_formula(mut self, role: SeededFormula) -> Self {
        self.formulas.push(PendingFormula::Remove(role));
        self
    }

    /// Start from an empty registry instead of the eight seeded formulas
    #[must_use]
    pub fn without_seeded_formulas(mut self) -> Self {
        self.seeded = false;
        self
    }

    // =========================================================================
    // Limits and sweep
    // =========================================================================

    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn max_production(mut self, tons: f64) -> Self {
        self.limits.max_production = tons;
        self
    }

    #[must_use]
    pub fn max_sales(mut self, tons: f64) -> Self {
        self.limits.max_sales = tons;
        self
    }

    #[must_use]
    pub fn max_inventory(mut self, tons: f64) -> Self {
        self.limits.max_inventory = tons;
        self
    }

    #[must_use]
    pub fn max_emissions(mut self, tons: f64) -> Self {
        self.limits.max_emissions = tons;
        self
    }

    #[must_use]
    pub fn sweep_range(mut self, start_percent: u32, end_percent: u32, step_percent: u32) -> Self {
        self.sweep = Some((start_percent, end_percent, step_percent));
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    pub fn build(self) -> Result<AppState, ScenarioError> {
        let mut inputs = OperationalInputs::default();
        for pending in self.inputs {
            match pending {
                PendingInput::Value(field, value) => inputs.set(field, value),
                PendingInput::Text(field, text) => {
                    if !inputs.set_text(field, &text) {
                        return Err(ScenarioError::InvalidInput {
                            field: field.label(),
                            text,
                        });
                    }
                }
            }
        }

        let mut parameters = ParameterStore::new();
        for draft in self.parameters {
            parameters.add(draft)?;
        }

        let mut formulas = if self.seeded {
            FormulaRegistry::seeded()
        } else {
            FormulaRegistry::empty()
        };
        for pending in self.formulas {
            match pending {
                PendingFormula::Add(draft) => {
                    formulas.add(draft)?;
                }
                PendingFormula::Replace(role, expression) => {
                    let id = FormulaId::from(role);
                    let draft = formulas
                        .get(&id)
                        .map(|f| FormulaDraft {
                            name: f.name.clone(),
                            expression,
                            unit: f.unit.clone(),
                            description: f.description.clone(),
                            subtract_from_profit: f.subtract_from_profit,
                        })
                        .ok_or_else(|| FormulaError::NotFound(id.clone()))?;
                    formulas.edit(&id, draft)?;
                }
                PendingFormula::Remove(role) => {
                    formulas.remove(&FormulaId::from(role))?;
                }
            }
        }

        let sweep = match self.sweep {
            Some((start, end, step)) => SweepConfig::new(start, end, step)?,
            None => SweepConfig::default(),
        };

        Ok(AppState {
            inputs,
            parameters,
            formulas,
            limits: self.limits,
            sweep,
        })
    }

    /// Build and immediately compute the derived state
    pub fn build_session(self) -> Result<Session, ScenarioError> {
        Ok(Session::new(self.build()?))
    }
}
