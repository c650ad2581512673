use serde::{Deserialize, Serialize};

/// Operational limits, all in tons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Limits {
    pub max_inventory: f64,
    pub max_production: f64,
    pub max_sales: f64,
    pub max_emissions: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_inventory: 60_000.0,
            max_production: 60_000.0,
            max_sales: 60_000.0,
            max_emissions: 150_000.0,
        }
    }
}
