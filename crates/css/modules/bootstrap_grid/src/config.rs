//! Grid configuration.

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Column count of the stock Bootstrap grid.
pub const DEFAULT_TOTAL_COLUMNS: u32 = 12;

/// Fixed properties of the grid system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns in one row
    pub total_columns: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_columns: DEFAULT_TOTAL_COLUMNS,
        }
    }
}

impl GridConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] when `total_columns` is zero.
    pub fn new(total_columns: u32) -> GridResult<Self> {
        let config = Self { total_columns };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] when `total_columns` is zero.
    pub fn validate(&self) -> GridResult<()> {
        if self.total_columns == 0 {
            return Err(GridError::invalid(
                "total_columns",
                "grid must have at least one column",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the configuration is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed grid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let json = read_to_string(path)
            .with_context(|| format!("failed to read grid configuration {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("invalid grid configuration {}", path.display()))?;
        log::debug!(
            "loaded grid configuration from {}: {config:?}",
            path.display()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Empty JSON yields the twelve column default.
    ///
    /// # Panics
    /// Panics if parsing fails or assertions fail.
    #[test]
    fn test_defaults_from_empty_json() {
        let config = GridConfig::from_json_str("{}").ok();
        assert_eq!(config, Some(GridConfig::default()));
        assert_eq!(config.map(|found| found.total_columns), Some(12));
    }

    /// Custom column counts are read back.
    ///
    /// # Panics
    /// Panics if parsing fails or assertions fail.
    #[test]
    fn test_custom_columns() {
        let config = GridConfig::from_json_str(r#"{ "total_columns": 24 }"#).ok();
        assert_eq!(config.map(|found| found.total_columns), Some(24));
    }

    /// Zero columns and unknown keys are rejected.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_rejects_invalid_config() {
        assert!(GridConfig::from_json_str(r#"{ "total_columns": 0 }"#).is_err());
        assert!(GridConfig::from_json_str(r#"{ "columns": 12 }"#).is_err());
        assert!(GridConfig::new(0).is_err());
    }
}
