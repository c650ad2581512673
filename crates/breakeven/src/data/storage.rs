//! Data directory layout and file access
//!
//! Directory structure:
//! ~/.breakeven/
//!   config.yaml          # Operational limits
//!   breakeven.log        # Application log
//!   scenarios/
//!     baseline.yaml
//!     expansion.yaml

use std::fs;
use std::path::{Path, PathBuf};

use breakeven_core::model::Limits;
use serde::{Deserialize, Serialize};

use super::scenario_data::ScenarioData;

/// Settings stored in config.yaml
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub limits: Limits,
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    ScenarioNotFound(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {msg}"),
            StorageError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            StorageError::ScenarioNotFound(name) => write!(
                f,
                "Scenario '{name}' is neither a file nor a saved scenario name"
            ),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the application data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default data directory (~/.breakeven/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".breakeven")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn scenarios_dir(&self) -> PathBuf {
        self.root.join("scenarios")
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.scenarios_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {e}")))
    }

    /// Load config.yaml; a missing file yields the default limits
    pub fn load_settings(&self) -> Result<Settings, StorageError> {
        let path = self.config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read settings: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse settings: {e}")))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.init()?;

        let yaml = serde_saphyr::to_string(settings)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize settings: {e}")))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write settings: {e}")))?;
        tracing::info!(path = %self.config_path().display(), "Saved settings");
        Ok(())
    }

    /// Resolve a scenario argument: an existing file path, or the name of a file in
    /// the scenarios directory (with or without the `.yaml` extension)
    pub fn resolve_scenario(&self, arg: &Path) -> Result<PathBuf, StorageError> {
        if arg.is_file() {
            return Ok(arg.to_path_buf());
        }

        let name = arg.to_string_lossy();
        let stem = name
            .strip_suffix(".yaml")
            .or_else(|| name.strip_suffix(".yml"))
            .unwrap_or(&name);
        let candidate = self
            .scenarios_dir()
            .join(format!("{}.yaml", sanitize_filename(stem)));

        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(StorageError::ScenarioNotFound(name.into_owned()))
        }
    }

    /// Names of the saved scenarios, sorted
    pub fn list_scenarios(&self) -> Result<Vec<String>, StorageError> {
        let dir = self.scenarios_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| StorageError::Io(format!("Failed to read scenarios directory: {e}")))?;
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Read and parse a scenario file
    pub fn load_scenario(&self, path: &Path) -> Result<ScenarioData, StorageError> {
        let content = fs::read_to_string(path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {e}", path.display()))
        })?;

        ScenarioData::from_yaml(&content).map_err(|e| {
            StorageError::Parse(format!("Failed to parse {}: {e}", path.display()))
        })
    }
}

/// Sanitize a scenario name to be safe for the filesystem
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
