//! Builtin operational inputs
//!
//! Nine of these values are exposed to formulas under fixed names. The two percentage
//! fields only drive the linked sales/inventory volumes and never reach a formula.

use serde::{Deserialize, Serialize};

use super::parameters::{is_numeric_text, parse_numeric};

/// Names under which the builtin inputs are visible to formulas.
/// Custom parameters may not reuse any of them.
pub const BUILTIN_NAMES: [&str; 9] = [
    "sellingPrice",
    "manufacturingCostPerTon",
    "storageCostPercent",
    "transportationCostPercent",
    "sustainabilityCostPerTonCO2",
    "co2EmissionFactor",
    "productionVolume",
    "salesVolume",
    "inventoryVolume",
];

pub fn is_builtin_name(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// An editable builtin field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    SellingPrice,
    ManufacturingCostPerTon,
    StorageCostPercent,
    TransportationCostPercent,
    SustainabilityCostPerTonCo2,
    Co2EmissionFactor,
    ProductionVolume,
    SalesVolume,
    SalesVolumePercent,
    InventoryVolume,
    InventoryVolumePercent,
}

impl InputField {
    pub const fn label(self) -> &'static str {
        match self {
            InputField::SellingPrice => "Selling Price per Ton",
            InputField::ManufacturingCostPerTon => "Manufacturing Cost per Ton",
            InputField::StorageCostPercent => "Storage/Holding Cost (%)",
            InputField::TransportationCostPercent => "Transportation Cost (%)",
            InputField::SustainabilityCostPerTonCo2 => "Sustainability Cost per CO2 Ton",
            InputField::Co2EmissionFactor => "CO2 Emission Factor (CO2/ton)",
            InputField::ProductionVolume => "Production Volume (tons)",
            InputField::SalesVolume => "Sales Volume (tons)",
            InputField::SalesVolumePercent => "Sales Volume (%)",
            InputField::InventoryVolume => "Inventory Volume (tons)",
            InputField::InventoryVolumePercent => "Inventory Volume (%)",
        }
    }
}

/// The builtin numeric inputs of the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalInputs {
    pub selling_price: f64,
    pub manufacturing_cost_per_ton: f64,
    pub storage_cost_percent: f64,
    pub transportation_cost_percent: f64,
    pub sustainability_cost_per_ton_co2: f64,
    pub co2_emission_factor: f64,
    pub production_volume: f64,
    pub sales_volume: f64,
    pub sales_volume_percent: f64,
    pub inventory_volume: f64,
    pub inventory_volume_percent: f64,
}

impl Default for OperationalInputs {
    fn default() -> Self {
        Self {
            selling_price: 40_000.0,
            manufacturing_cost_per_ton: 36_600.0,
            storage_cost_percent: 1.75,
            transportation_cost_percent: 1.3,
            sustainability_cost_per_ton_co2: 300.0,
            co2_emission_factor: 2.53,
            production_volume: 50_000.0,
            sales_volume: 50_000.0,
            sales_volume_percent: 100.0,
            inventory_volume: 0.0,
            inventory_volume_percent: 0.0,
        }
    }
}

impl OperationalInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::SellingPrice => self.selling_price,
            InputField::ManufacturingCostPerTon => self.manufacturing_cost_per_ton,
            InputField::StorageCostPercent => self.storage_cost_percent,
            InputField::TransportationCostPercent => self.transportation_cost_percent,
            InputField::SustainabilityCostPerTonCo2 => self.sustainability_cost_per_ton_co2,
            InputField::Co2EmissionFactor => self.co2_emission_factor,
            InputField::ProductionVolume => self.production_volume,
            InputField::SalesVolume => self.sales_volume,
            InputField::SalesVolumePercent => self.sales_volume_percent,
            InputField::InventoryVolume => self.inventory_volume,
            InputField::InventoryVolumePercent => self.inventory_volume_percent,
        }
    }

    /// Set a field from raw text as typed by the user.
    ///
    /// Text that is not a plain unsigned decimal is rejected and nothing changes.
    /// Returns whether the edit was applied.
    pub fn set_text(&mut self, field: InputField, text: &str) -> bool {
        if !is_numeric_text(text) {
            return false;
        }
        self.set(field, parse_numeric(text));
        true
    }

    /// Set a field and keep the production/sales/inventory triple consistent.
    ///
    /// Percent edits are clamped to `[0, 100]`; ton edits are not clamped.
    pub fn set(&mut self, field: InputField, value: f64) {
        let previous_sales_percent = self.sales_volume_percent;

        match field {
            InputField::SellingPrice => self.selling_price = value,
            InputField::ManufacturingCostPerTon => self.manufacturing_cost_per_ton = value,
            InputField::StorageCostPercent => self.storage_cost_percent = value,
            InputField::TransportationCostPercent => self.transportation_cost_percent = value,
            InputField::SustainabilityCostPerTonCo2 => {
                self.sustainability_cost_per_ton_co2 = value
            }
            InputField::Co2EmissionFactor => self.co2_emission_factor = value,
            InputField::ProductionVolume => {
                self.production_volume = value;
                self.sales_volume = value * previous_sales_percent / 100.0;
                self.inventory_volume = value - self.sales_volume;
            }
            InputField::SalesVolume => {
                self.sales_volume = value;
                self.inventory_volume = self.production_volume - value;
            }
            InputField::SalesVolumePercent => {
                let percent = value.clamp(0.0, 100.0);
                self.sales_volume = self.production_volume * percent / 100.0;
                self.inventory_volume = self.production_volume - self.sales_volume;
            }
            InputField::InventoryVolume => {
                self.inventory_volume = value;
                self.sales_volume = self.production_volume - value;
            }
            InputField::InventoryVolumePercent => {
                let percent = value.clamp(0.0, 100.0);
                self.inventory_volume = self.production_volume * percent / 100.0;
                self.sales_volume = self.production_volume - self.inventory_volume;
            }
        }

        self.rederive_percentages();
    }

    fn rederive_percentages(&mut self) {
        if self.production_volume > 0.0 {
            self.sales_volume_percent = self.sales_volume / self.production_volume * 100.0;
            self.inventory_volume_percent =
                self.inventory_volume / self.production_volume * 100.0;
        } else {
            self.sales_volume = 0.0;
            self.inventory_volume = 0.0;
            self.sales_volume_percent = 0.0;
            self.inventory_volume_percent = 0.0;
        }
    }

    /// The nine formula-visible values, paired with their builtin names
    pub fn named_values(&self) -> [(&'static str, f64); 9] {
        [
            (BUILTIN_NAMES[0], self.selling_price),
            (BUILTIN_NAMES[1], self.manufacturing_cost_per_ton),
            (BUILTIN_NAMES[2], self.storage_cost_percent),
            (BUILTIN_NAMES[3], self.transportation_cost_percent),
            (BUILTIN_NAMES[4], self.sustainability_cost_per_ton_co2),
            (BUILTIN_NAMES[5], self.co2_emission_factor),
            (BUILTIN_NAMES[6], self.production_volume),
            (BUILTIN_NAMES[7], self.sales_volume),
            (BUILTIN_NAMES[8], self.inventory_volume),
        ]
    }
}
