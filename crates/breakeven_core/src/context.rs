//! Flat name-to-number snapshots used for one evaluation

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{OperationalInputs, ParameterStore};

/// Mapping from identifier to value, rebuilt whenever inputs or parameters change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    values: FxHashMap<String, f64>,
}

impl EvaluationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the nine builtin inputs with every custom parameter.
    ///
    /// Custom parameters are inserted last, so if one ever shares a builtin's name
    /// the custom value wins.
    #[must_use]
    pub fn build(inputs: &OperationalInputs, parameters: &ParameterStore) -> Self {
        let mut context = Self::new();
        for (name, value) in inputs.named_values() {
            context.insert(name, value);
        }
        for parameter in parameters.iter() {
            context.insert(parameter.name.clone(), parameter.numeric_value());
        }
        context
    }

    /// A copy with the sales and inventory volumes replaced, as used by a sweep point
    #[must_use]
    pub fn with_volumes(&self, sales_volume: f64, inventory_volume: f64) -> Self {
        let mut context = self.clone();
        context.insert("salesVolume", sales_volume);
        context.insert("inventoryVolume", inventory_volume);
        context
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for EvaluationContext {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (name, value) in iter {
            context.insert(name, value);
        }
        context
    }
}
