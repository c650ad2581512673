use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scenario in human-readable YAML form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Builtin operational inputs; omitted fields keep their defaults
    #[serde(default)]
    pub inputs: InputsData,

    /// Custom parameters, added in order
    #[serde(default)]
    pub parameters: Vec<ParameterData>,

    /// Additional formulas, added after the seeded ones
    #[serde(default)]
    pub formulas: Vec<FormulaData>,

    /// Replacement expressions for seeded formulas, keyed by seeded id (e.g. `net-profit`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, String>,

    /// Seeded formula ids to drop
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
}

impl ScenarioData {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }
}

/// A number written either bare or quoted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueData {
    Number(f64),
    Text(String),
}

impl ValueData {
    /// The value as input text, subject to the usual numeric-text check
    pub fn to_text(&self) -> String {
        match self {
            ValueData::Number(n) => n.to_string(),
            ValueData::Text(s) => s.trim().to_string(),
        }
    }
}

impl fmt::Display for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Builtin operational inputs.
///
/// Fields are applied in declaration order, so volumes given in tons are linked
/// against the production volume set above them. A percentage given together with
/// its tons field wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_cost_per_ton: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_cost_percent: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_cost_percent: Option<ValueData>,
    #[serde(
        default,
        rename = "sustainabilityCostPerTonCO2",
        skip_serializing_if = "Option::is_none"
    )]
    pub sustainability_cost_per_ton_co2: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_emission_factor: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_volume: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_volume: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_volume_percent: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_volume: Option<ValueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_volume_percent: Option<ValueData>,
}

/// A custom parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterData {
    pub name: String,
    /// Display label; defaults to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: ValueData,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

/// A user formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaData {
    pub name: String,
    pub expression: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtract_from_profit: bool,
}
