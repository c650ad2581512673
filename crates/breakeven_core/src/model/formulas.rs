//! Formulas and the registry that owns them

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FormulaId, SeededFormula};
use crate::error::FormulaError;
use crate::expression::Expression;

const CURRENCY_UNIT: &str = "INR";
const EMISSIONS_UNIT: &str = "tons CO2";

const REVENUE: &str = "sellingPrice * salesVolume";
const MANUFACTURING_COST: &str = "manufacturingCostPerTon * productionVolume";
const STORAGE_COST: &str = "sellingPrice * (storageCostPercent / 100) * inventoryVolume";
const TRANSPORTATION_COST: &str =
    "sellingPrice * (transportationCostPercent / 100) * productionVolume";
const EMISSIONS: &str = "co2EmissionFactor * productionVolume";
const SUSTAINABILITY_COST: &str =
    "sustainabilityCostPerTonCO2 * co2EmissionFactor * productionVolume";

/// A named arithmetic expression over parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub id: FormulaId,
    pub name: String,
    pub expression: String,
    pub unit: String,
    pub description: String,
    /// Deduct this formula's value from the net-profit headline
    pub subtract_from_profit: bool,
}

impl Formula {
    /// The structural role of this formula, if it is one of the seeded eight
    pub fn seeded(&self) -> Option<SeededFormula> {
        SeededFormula::from_id(self.id.as_str())
    }
}

/// Form data for adding or editing a formula
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaDraft {
    pub name: String,
    pub expression: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtract_from_profit: bool,
}

impl FormulaDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Flag the formula as a deduction from net profit
    #[must_use]
    pub fn subtract_from_profit(mut self) -> Self {
        self.subtract_from_profit = true;
        self
    }
}

/// Owns every formula, seeded and user-defined, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaRegistry {
    formulas: Vec<Formula>,
    next_id: u32,
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl FormulaRegistry {
    /// A registry holding no formulas at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            formulas: Vec::new(),
            next_id: 1,
        }
    }

    /// A registry holding the eight default formulas
    #[must_use]
    pub fn seeded() -> Self {
        let total_cost =
            format!("{MANUFACTURING_COST} + {STORAGE_COST} + {TRANSPORTATION_COST} + {SUSTAINABILITY_COST}");
        let net_profit = format!("{REVENUE} - ({total_cost})");

        let seed = |role: SeededFormula, name: &str, expression: &str, unit: &str, description: &str| {
            Formula {
                id: role.into(),
                name: name.to_string(),
                expression: expression.to_string(),
                unit: unit.to_string(),
                description: description.to_string(),
                subtract_from_profit: false,
            }
        };

        Self {
            formulas: vec![
                seed(SeededFormula::Revenue, "Total Revenue", REVENUE, CURRENCY_UNIT, "Selling price times sales volume"),
                seed(SeededFormula::ManufacturingCost, "Manufacturing Cost", MANUFACTURING_COST, CURRENCY_UNIT, "Cost of producing the full production volume"),
                seed(SeededFormula::StorageCost, "Storage Cost", STORAGE_COST, CURRENCY_UNIT, "Holding cost of unsold inventory"),
                seed(SeededFormula::TransportationCost, "Transportation Cost", TRANSPORTATION_COST, CURRENCY_UNIT, "Freight as a share of production value"),
                seed(SeededFormula::Emissions, "Total CO2 Emissions", EMISSIONS, EMISSIONS_UNIT, "Emission factor times production volume"),
                seed(SeededFormula::SustainabilityCost, "Sustainability Cost", SUSTAINABILITY_COST, CURRENCY_UNIT, "Carbon price applied to total emissions"),
                seed(SeededFormula::TotalCost, "Total Cost", &total_cost, CURRENCY_UNIT, "Sum of all cost components"),
                seed(SeededFormula::NetProfit, "Net Profit", &net_profit, CURRENCY_UNIT, "Revenue minus total cost"),
            ],
            next_id: 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Formula> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn get(&self, id: &FormulaId) -> Option<&Formula> {
        self.formulas.iter().find(|f| &f.id == id)
    }

    pub fn get_seeded(&self, role: SeededFormula) -> Option<&Formula> {
        self.formulas.iter().find(|f| f.id.as_str() == role.id())
    }

    pub fn add(&mut self, draft: FormulaDraft) -> Result<FormulaId, FormulaError> {
        validate(&draft)?;

        let id = self.fresh_id();
        self.formulas.push(Formula {
            id: id.clone(),
            name: draft.name,
            expression: draft.expression,
            unit: draft.unit,
            description: draft.description,
            subtract_from_profit: draft.subtract_from_profit,
        });
        Ok(id)
    }

    /// Replace every editable field of a formula. The id never changes.
    pub fn edit(&mut self, id: &FormulaId, draft: FormulaDraft) -> Result<(), FormulaError> {
        let index = self.index_of(id)?;
        validate(&draft)?;

        let formula = &mut self.formulas[index];
        formula.name = draft.name;
        formula.expression = draft.expression;
        formula.unit = draft.unit;
        formula.description = draft.description;
        formula.subtract_from_profit = draft.subtract_from_profit;
        Ok(())
    }

    /// Remove a formula. Seeded formulas may be removed too.
    pub fn remove(&mut self, id: &FormulaId) -> Result<Formula, FormulaError> {
        let index = self.index_of(id)?;
        Ok(self.formulas.remove(index))
    }

    fn index_of(&self, id: &FormulaId) -> Result<usize, FormulaError> {
        self.formulas
            .iter()
            .position(|f| &f.id == id)
            .ok_or_else(|| FormulaError::NotFound(id.clone()))
    }

    fn fresh_id(&mut self) -> FormulaId {
        loop {
            let candidate = FormulaId(format!("formula-{}", self.next_id));
            self.next_id += 1;
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// Names and expressions must be non-empty and the expression must parse.
/// Unknown identifiers are not checked here; they surface at evaluation time.
fn validate(draft: &FormulaDraft) -> Result<(), FormulaError> {
    let result = if draft.name.trim().is_empty() {
        Err(FormulaError::EmptyName)
    } else if draft.expression.trim().is_empty() {
        Err(FormulaError::EmptyExpression)
    } else {
        Expression::parse(&draft.expression)
            .map(|_| ())
            .map_err(|source| FormulaError::InvalidExpression {
                expression: draft.expression.clone(),
                source,
            })
    };

    if let Err(e) = &result {
        debug!(name = %draft.name, error = %e, "Rejected formula");
    }
    result
}
