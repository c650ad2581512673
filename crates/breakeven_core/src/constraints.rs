//! Feasibility of the current volumes and emissions against configured limits

use serde::{Deserialize, Serialize};

use crate::model::{Limits, OperationalInputs};

/// One `current <= limit` comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintStatus {
    pub current: f64,
    pub limit: f64,
}

impl ConstraintStatus {
    pub fn new(current: f64, limit: f64) -> Self {
        Self { current, limit }
    }

    pub fn satisfied(&self) -> bool {
        self.current <= self.limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintReport {
    pub production: ConstraintStatus,
    pub sales: ConstraintStatus,
    pub inventory: ConstraintStatus,
    pub emissions: ConstraintStatus,
}

impl ConstraintReport {
    pub fn all_satisfied(&self) -> bool {
        self.iter().all(|(_, status)| status.satisfied())
    }

    /// Labelled statuses in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ConstraintStatus)> {
        [
            ("Production Volume", &self.production),
            ("Sales Volume", &self.sales),
            ("Inventory Space", &self.inventory),
            ("Total CO2 Emission", &self.emissions),
        ]
        .into_iter()
    }
}

pub fn check(inputs: &OperationalInputs, total_emissions: f64, limits: &Limits) -> ConstraintReport {
    ConstraintReport {
        production: ConstraintStatus::new(inputs.production_volume, limits.max_production),
        sales: ConstraintStatus::new(inputs.sales_volume, limits.max_sales),
        inventory: ConstraintStatus::new(inputs.inventory_volume, limits.max_inventory),
        emissions: ConstraintStatus::new(total_emissions, limits.max_emissions),
    }
}
