use breakeven_core::analysis::SweepConfig;
use breakeven_core::config::ScenarioBuilder;
use breakeven_core::error::ScenarioError;
use breakeven_core::model::{
    FormulaDraft, InputField, Limits, ParameterDraft, SeededFormula, is_numeric_text,
};
use breakeven_core::state::AppState;

use super::scenario_data::{InputsData, ScenarioData, ValueData};

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A parameter value that is not a plain unsigned decimal
    InvalidParameterValue { name: String, value: String },
    /// An override or removal naming something other than a seeded formula
    UnknownSeededFormula(String),
    Scenario(ScenarioError),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InvalidParameterValue { name, value } => {
                write!(f, "Parameter '{name}' has non-numeric value '{value}'")
            }
            ConvertError::UnknownSeededFormula(id) => {
                write!(f, "'{id}' is not a seeded formula id")
            }
            ConvertError::Scenario(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Scenario(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScenarioError> for ConvertError {
    fn from(err: ScenarioError) -> Self {
        ConvertError::Scenario(err)
    }
}

fn input_fields(inputs: &InputsData) -> [(InputField, &Option<ValueData>); 11] {
    [
        (InputField::SellingPrice, &inputs.selling_price),
        (InputField::ManufacturingCostPerTon, &inputs.manufacturing_cost_per_ton),
        (InputField::StorageCostPercent, &inputs.storage_cost_percent),
        (InputField::TransportationCostPercent, &inputs.transportation_cost_percent),
        (InputField::SustainabilityCostPerTonCo2, &inputs.sustainability_cost_per_ton_co2),
        (InputField::Co2EmissionFactor, &inputs.co2_emission_factor),
        (InputField::ProductionVolume, &inputs.production_volume),
        (InputField::SalesVolume, &inputs.sales_volume),
        (InputField::SalesVolumePercent, &inputs.sales_volume_percent),
        (InputField::InventoryVolume, &inputs.inventory_volume),
        (InputField::InventoryVolumePercent, &inputs.inventory_volume_percent),
    ]
}

fn seeded_role(id: &str) -> Result<SeededFormula, ConvertError> {
    SeededFormula::from_id(id).ok_or_else(|| ConvertError::UnknownSeededFormula(id.to_string()))
}

/// Translate scenario data into builder calls. Nothing is validated by the core until
/// the builder is built.
pub fn to_builder(data: &ScenarioData) -> Result<ScenarioBuilder, ConvertError> {
    let mut builder = ScenarioBuilder::new();

    for (field, value) in input_fields(&data.inputs) {
        if let Some(value) = value {
            builder = builder.input_text(field, value.to_text());
        }
    }

    for parameter in &data.parameters {
        let value = parameter.value.to_text();
        if !is_numeric_text(&value) {
            return Err(ConvertError::InvalidParameterValue {
                name: parameter.name.clone(),
                value,
            });
        }
        let draft = ParameterDraft::new(parameter.name.as_str(), value)
            .label(parameter.label.as_deref().unwrap_or(&parameter.name))
            .unit(parameter.unit.as_str())
            .description(parameter.description.as_str());
        builder = builder.parameter(draft);
    }

    for (id, expression) in &data.overrides {
        builder = builder.override_formula(seeded_role(id)?, expression.as_str());
    }
    for id in &data.remove {
        builder = builder.without_formula(seeded_role(id)?);
    }

    for formula in &data.formulas {
        let mut draft = FormulaDraft::new(formula.name.as_str(), formula.expression.as_str())
            .unit(formula.unit.as_str())
            .description(formula.description.as_str());
        if formula.subtract_from_profit {
            draft = draft.subtract_from_profit();
        }
        builder = builder.formula(draft);
    }

    Ok(builder)
}

/// Build the full application state for a scenario under the given limits
pub fn to_app_state(
    data: &ScenarioData,
    limits: Limits,
    sweep: Option<SweepConfig>,
) -> Result<AppState, ConvertError> {
    let mut builder = to_builder(data)?.limits(limits);
    if let Some(sweep) = sweep {
        builder = builder.sweep_range(sweep.start_percent(), sweep.end_percent(), sweep.step_percent());
    }
    let state = builder.build()?;

    tracing::debug!(
        scenario = data.name.as_deref().unwrap_or("unnamed"),
        parameters = state.parameters.len(),
        formulas = state.formulas.len(),
        "Converted scenario"
    );
    Ok(state)
}
