//! Custom parameters and the store that owns them

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ParameterId;
use super::inputs::is_builtin_name;
use crate::error::ParameterError;

/// A user-defined named value usable inside formulas.
///
/// The value is kept as the text the user typed; [`Parameter::numeric_value`] turns it
/// into a number on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    pub label: String,
    pub value: String,
    pub unit: String,
    pub description: String,
}

impl Parameter {
    pub fn numeric_value(&self) -> f64 {
        parse_numeric(&self.value)
    }
}

/// Form data for adding or editing a parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDraft {
    pub label: String,
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

impl ParameterDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            value: value.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
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
}

/// Strip every character outside `[A-Za-z0-9_]`
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Accepts the empty string or digits with at most one decimal point.
/// No sign, exponent or grouping separators.
pub fn is_numeric_text(text: &str) -> bool {
    let mut seen_point = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Text to number coercion shared by every parameter and input: parse as a float,
/// fall back to zero on empty, unparseable or non-finite text.
pub fn parse_numeric(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Owns all custom parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterStore {
    parameters: Vec<Parameter>,
    next_id: u32,
}

impl ParameterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn get(&self, id: ParameterId) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Add a new parameter. The name is sanitized before validation.
    pub fn add(&mut self, draft: ParameterDraft) -> Result<ParameterId, ParameterError> {
        let name = self.validate_name(&draft.name, None)?;

        let id = ParameterId(self.next_id);
        self.next_id += 1;
        self.parameters.push(Parameter {
            id,
            name,
            label: draft.label,
            value: draft.value,
            unit: draft.unit,
            description: draft.description,
        });
        Ok(id)
    }

    /// Replace every field of an existing parameter
    pub fn edit(&mut self, id: ParameterId, draft: ParameterDraft) -> Result<(), ParameterError> {
        let index = self.index_of(id)?;
        let name = self.validate_name(&draft.name, Some(id))?;

        let parameter = &mut self.parameters[index];
        parameter.name = name;
        parameter.label = draft.label;
        parameter.value = draft.value;
        parameter.unit = draft.unit;
        parameter.description = draft.description;
        Ok(())
    }

    pub fn remove(&mut self, id: ParameterId) -> Result<Parameter, ParameterError> {
        let index = self.index_of(id)?;
        Ok(self.parameters.remove(index))
    }

    /// Update a parameter's value from raw input text.
    ///
    /// Input failing [`is_numeric_text`] is ignored. Returns whether the value was accepted.
    pub fn set_value(&mut self, id: ParameterId, text: &str) -> bool {
        if !is_numeric_text(text) {
            return false;
        }
        match self.parameters.iter_mut().find(|p| p.id == id) {
            Some(parameter) => {
                parameter.value = text.to_string();
                true
            }
            None => false,
        }
    }

    fn index_of(&self, id: ParameterId) -> Result<usize, ParameterError> {
        self.parameters
            .iter()
            .position(|p| p.id == id)
            .ok_or(ParameterError::NotFound(id))
    }

    fn validate_name(
        &self,
        raw: &str,
        editing: Option<ParameterId>,
    ) -> Result<String, ParameterError> {
        let name = sanitize_name(raw);

        let result = if name.is_empty() {
            Err(ParameterError::EmptyName)
        } else if name.chars().all(|c| c.is_ascii_digit()) {
            Err(ParameterError::InvalidName(name))
        } else if is_builtin_name(&name) {
            Err(ParameterError::ReservedName(name))
        } else if self
            .parameters
            .iter()
            .any(|p| p.name == name && Some(p.id) != editing)
        {
            Err(ParameterError::DuplicateName(name))
        } else {
            Ok(name)
        };

        if let Err(e) = &result {
            debug!(raw, error = %e, "Rejected parameter name");
        }
        result
    }
}
