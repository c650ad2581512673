mod formulas;
mod ids;
mod inputs;
mod limits;
mod parameters;
mod results;

pub use formulas::{Formula, FormulaDraft, FormulaRegistry};
pub use ids::{FormulaId, ParameterId, SeededFormula};
pub use inputs::{BUILTIN_NAMES, InputField, OperationalInputs, is_builtin_name};
pub use limits::Limits;
pub use parameters::{
    Parameter, ParameterDraft, ParameterStore, is_numeric_text, parse_numeric, sanitize_name,
};
pub use results::{AnalysisPoint, Evaluation, FormulaResult, Headline};
