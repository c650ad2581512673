//! Subcommand implementations
//!
//! Each command returns its rendered output so the binary only has to print it.

use std::path::Path;

use breakeven_core::analysis::SweepConfig;
use breakeven_core::context::EvaluationContext;
use breakeven_core::expression::evaluate;
use breakeven_core::model::Limits;
use breakeven_core::state::{AppState, recompute};
use color_eyre::eyre::{Result, WrapErr};

use crate::data::{DataDirectory, Settings, convert};
use crate::report;
use crate::util::format::format_number;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Optional replacements for the stored limits
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LimitsUpdate {
    pub max_production: Option<f64>,
    pub max_sales: Option<f64>,
    pub max_inventory: Option<f64>,
    pub max_emissions: Option<f64>,
}

impl LimitsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, limits: &mut Limits) {
        let fields = [
            (self.max_production, &mut limits.max_production),
            (self.max_sales, &mut limits.max_sales),
            (self.max_inventory, &mut limits.max_inventory),
            (self.max_emissions, &mut limits.max_emissions),
        ];
        for (update, slot) in fields {
            if let Some(value) = update {
                *slot = value;
            }
        }
    }
}

/// A loaded scenario: display name plus validated state
pub struct LoadedScenario {
    pub name: String,
    pub state: AppState,
}

/// Resolve, read and convert a scenario under the stored limits
pub fn load_scenario(
    dir: &DataDirectory,
    scenario: &Path,
    sweep: Option<SweepConfig>,
) -> Result<LoadedScenario> {
    let path = dir.resolve_scenario(scenario)?;
    let data = dir.load_scenario(&path)?;
    let settings = dir.load_settings()?;

    let state = convert::to_app_state(&data, settings.limits, sweep)
        .wrap_err_with(|| format!("Invalid scenario {}", path.display()))?;

    let name = data.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });
    tracing::info!(scenario = %name, path = %path.display(), "Loaded scenario");
    Ok(LoadedScenario { name, state })
}

pub fn report(dir: &DataDirectory, scenario: &Path, format: OutputFormat) -> Result<String> {
    let loaded = load_scenario(dir, scenario, None)?;
    let derived = recompute(&loaded.state);

    match format {
        OutputFormat::Text => Ok(report::render_report(
            Some(&loaded.name),
            &loaded.state,
            &derived,
        )),
        OutputFormat::Json => Ok(report::report_json(&loaded.state, &derived)?),
    }
}

pub fn sweep(
    dir: &DataDirectory,
    scenario: &Path,
    config: SweepConfig,
    format: OutputFormat,
) -> Result<String> {
    let loaded = load_scenario(dir, scenario, Some(config))?;
    let derived = recompute(&loaded.state);

    match format {
        OutputFormat::Text => Ok(report::render_sweep(&derived.analysis, &loaded.state.sweep)),
        OutputFormat::Json => Ok(report::sweep_json(&derived.analysis)?),
    }
}

/// Evaluate one expression against a scenario's context, or the default one
pub fn eval(dir: &DataDirectory, expression: &str, scenario: Option<&Path>) -> Result<String> {
    let state = match scenario {
        Some(scenario) => load_scenario(dir, scenario, None)?.state,
        None => AppState::default(),
    };
    let context = EvaluationContext::build(&state.inputs, &state.parameters);

    let value = evaluate(expression, &context)
        .wrap_err_with(|| format!("Could not evaluate '{expression}'"))?;
    Ok(format_number(value))
}

/// Show the stored limits, applying and saving any updates first
pub fn limits(dir: &DataDirectory, update: LimitsUpdate) -> Result<String> {
    let mut settings: Settings = dir.load_settings()?;
    if !update.is_empty() {
        update.apply(&mut settings.limits);
        dir.save_settings(&settings)?;
    }
    Ok(report::render_limits(&settings.limits))
}

/// Names of the scenarios saved in the data directory
pub fn scenarios(dir: &DataDirectory) -> Result<String> {
    let names = dir.list_scenarios()?;
    if names.is_empty() {
        return Ok(format!(
            "no saved scenarios in {}",
            dir.scenarios_dir().display()
        ));
    }
    Ok(names.join("\n"))
}
