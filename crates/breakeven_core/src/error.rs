use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{FormulaId, ParameterId};

/// Errors produced while parsing or evaluating a single expression.
///
/// These are always returned as values; the evaluator never panics on user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvalError {
    /// The expression contained nothing but whitespace
    Empty,
    UnexpectedChar { ch: char, position: usize },
    UnexpectedToken { found: String, position: usize },
    UnexpectedEnd,
    InvalidNumber { text: String, position: usize },
    UnknownIdentifier(String),
    /// The final value was NaN or infinite
    NonFinite,
    TooDeep { limit: usize },
    TooLong { limit: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Empty => write!(f, "expression is empty"),
            EvalError::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character '{ch}' at position {position}")
            }
            EvalError::UnexpectedToken { found, position } => {
                write!(f, "unexpected '{found}' at position {position}")
            }
            EvalError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            EvalError::InvalidNumber { text, position } => {
                write!(f, "malformed number '{text}' at position {position}")
            }
            EvalError::UnknownIdentifier(name) => write!(f, "undefined symbol '{name}'"),
            EvalError::NonFinite => write!(f, "result is not a finite number"),
            EvalError::TooDeep { limit } => {
                write!(f, "expression is nested more than {limit} levels deep")
            }
            EvalError::TooLong { limit } => {
                write!(f, "expression has more than {limit} tokens")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Errors related to adding or editing custom parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    EmptyName,
    /// Name is not usable as an identifier (e.g. only digits)
    InvalidName(String),
    /// Name collides with one of the builtin operational inputs
    ReservedName(String),
    DuplicateName(String),
    NotFound(ParameterId),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::EmptyName => write!(f, "parameter name is required"),
            ParameterError::InvalidName(name) => {
                write!(f, "'{name}' is not a valid parameter name")
            }
            ParameterError::ReservedName(name) => {
                write!(f, "'{name}' is reserved for a builtin input")
            }
            ParameterError::DuplicateName(name) => {
                write!(f, "a parameter named '{name}' already exists")
            }
            ParameterError::NotFound(id) => write!(f, "parameter {id:?} not found"),
        }
    }
}

impl std::error::Error for ParameterError {}

/// Errors related to adding or editing formulas
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    EmptyName,
    EmptyExpression,
    InvalidExpression {
        expression: String,
        source: EvalError,
    },
    NotFound(FormulaId),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::EmptyName => write!(f, "formula name is required"),
            FormulaError::EmptyExpression => write!(f, "formula expression is required"),
            FormulaError::InvalidExpression { expression, source } => {
                write!(f, "invalid expression '{expression}': {source}")
            }
            FormulaError::NotFound(id) => write!(f, "formula '{id}' not found"),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormulaError::InvalidExpression { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Invalid sweep range
#[derive(Debug, Clone, PartialEq)]
pub enum SweepConfigError {
    ZeroStep,
    InvertedRange { start: u32, end: u32 },
    TooManyPoints { count: u64, limit: u64 },
}

impl fmt::Display for SweepConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepConfigError::ZeroStep => write!(f, "sweep step must be greater than zero"),
            SweepConfigError::InvertedRange { start, end } => {
                write!(f, "sweep start {start}% is above sweep end {end}%")
            }
            SweepConfigError::TooManyPoints { count, limit } => {
                write!(f, "sweep would sample {count} points, more than the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for SweepConfigError {}

/// Errors raised while assembling a scenario from external input
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    Parameter(ParameterError),
    Formula(FormulaError),
    Sweep(SweepConfigError),
    /// An operational input was given text the numeric gate rejects
    InvalidInput { field: &'static str, text: String },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Parameter(e) => write!(f, "{e}"),
            ScenarioError::Formula(e) => write!(f, "{e}"),
            ScenarioError::Sweep(e) => write!(f, "{e}"),
            ScenarioError::InvalidInput { field, text } => {
                write!(f, "'{text}' is not a valid value for {field}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Parameter(e) => Some(e),
            ScenarioError::Formula(e) => Some(e),
            ScenarioError::Sweep(e) => Some(e),
            ScenarioError::InvalidInput { .. } => None,
        }
    }
}

impl From<ParameterError> for ScenarioError {
    fn from(err: ParameterError) -> Self {
        ScenarioError::Parameter(err)
    }
}

impl From<FormulaError> for ScenarioError {
    fn from(err: FormulaError) -> Self {
        ScenarioError::Formula(err)
    }
}

impl From<SweepConfigError> for ScenarioError {
    fn from(err: SweepConfigError) -> Self {
        ScenarioError::Sweep(err)
    }
}
