//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{OvertimePolicy, PayrollConfig, RateTable};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── rates.yaml   # Default rate and custom rates by employee name
/// └── policy.yaml  # Weekend multipliers and the weekly overtime threshold
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let rate = loader.config().rate_table().rate_for("Aaron Hall");
/// println!("Hourly rate: £{}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - Any rate or multiplier fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rate_table = Self::load_yaml::<RateTable>(&path.join("rates.yaml"))?;
        rate_table.validate()?;

        let policy = Self::load_yaml::<OvertimePolicy>(&path.join("policy.yaml"))?;
        policy.validate()?;

        Ok(Self {
            config: PayrollConfig::new(rate_table, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}
