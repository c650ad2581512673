pub mod convert;
pub mod scenario_data;
pub mod storage;

pub use convert::{ConvertError, to_app_state, to_builder};
pub use scenario_data::{FormulaData, InputsData, ParameterData, ScenarioData, ValueData};
pub use storage::{DataDirectory, Settings, StorageError};
