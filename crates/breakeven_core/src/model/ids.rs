//! Unique identifiers for parameters and formulas
//!
//! Parameters use a numeric id assigned by the store. Formulas use a string id so the
//! eight seeded formulas can carry their fixed, well-known names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a custom parameter within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParameterId(pub u32);

/// Unique identifier for a formula within a registry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormulaId(pub String);

impl FormulaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SeededFormula> for FormulaId {
    fn from(seeded: SeededFormula) -> Self {
        FormulaId(seeded.id().to_string())
    }
}

/// The eight formulas every registry starts with.
///
/// Their ids are structurally significant: the aggregator looks them up by id to
/// build the headline totals, whatever their current expression is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeededFormula {
    Revenue,
    ManufacturingCost,
    StorageCost,
    TransportationCost,
    Emissions,
    SustainabilityCost,
    TotalCost,
    NetProfit,
}

impl SeededFormula {
    pub const ALL: [SeededFormula; 8] = [
        SeededFormula::Revenue,
        SeededFormula::ManufacturingCost,
        SeededFormula::StorageCost,
        SeededFormula::TransportationCost,
        SeededFormula::Emissions,
        SeededFormula::SustainabilityCost,
        SeededFormula::TotalCost,
        SeededFormula::NetProfit,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            SeededFormula::Revenue => "revenue",
            SeededFormula::ManufacturingCost => "manufacturing-cost",
            SeededFormula::StorageCost => "storage-cost",
            SeededFormula::TransportationCost => "transportation-cost",
            SeededFormula::Emissions => "emissions",
            SeededFormula::SustainabilityCost => "sustainability-cost",
            SeededFormula::TotalCost => "total-cost",
            SeededFormula::NetProfit => "net-profit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}
