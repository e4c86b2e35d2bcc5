use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{CleanerError, Result};

/// Run configuration. Every field defaults to the fixed snack-extract values,
/// so an empty TOML file is equivalent to no file at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub group_column: String,
    pub target_groups: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub placeholder: String,
    /// Directory for rotated JSON logs; console only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(constants::DEFAULT_OUTPUT_PATH),
            group_column: constants::GROUP_COLUMN.to_string(),
            target_groups: to_strings(&constants::TARGET_GROUPS),
            numeric_columns: to_strings(&constants::NUMERIC_COLUMNS),
            categorical_columns: to_strings(&constants::CATEGORICAL_COLUMNS),
            placeholder: constants::PLACEHOLDER.to_string(),
            log_dir: None,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl CleanerConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = path else {
            return Ok(Self::default());
        };
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: CleanerConfig = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Columns to read from the source file
    pub fn kept_columns(&self) -> Vec<String> {
        self.categorical_columns
            .iter()
            .chain(self.numeric_columns.iter())
            .cloned()
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.numeric_columns.is_empty() && self.categorical_columns.is_empty() {
            return Err(CleanerError::Config("no columns configured".to_string()));
        }
        if self.target_groups.is_empty() {
            return Err(CleanerError::Config("target_groups is empty".to_string()));
        }

        let numeric: HashSet<&str> = self.numeric_columns.iter().map(String::as_str).collect();
        if let Some(both) = self
            .categorical_columns
            .iter()
            .find(|c| numeric.contains(c.as_str()))
        {
            return Err(CleanerError::Config(format!(
                "column '{}' is listed as both numeric and categorical",
                both
            )));
        }

        if !self.kept_columns().contains(&self.group_column) {
            return Err(CleanerError::Config(format!(
                "group column '{}' is not one of the kept columns",
                self.group_column
            )));
        }
        Ok(())
    }
}
