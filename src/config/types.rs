//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Configuration is always
//! passed into the calculator explicitly; the engine keeps no ambient or
//! process-wide state.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Mapping of employee name to hourly pay rate, with a default fallback.
///
/// A stored rate of exactly zero means "unset" and falls back to
/// `default_rate`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The rate applied when a name has no custom rate.
    pub default_rate: Decimal,
    /// Custom hourly rates by employee name.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Resolves the hourly rate for an employee name.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::config::RateTable;
    /// use rust_decimal::Decimal;
    /// use std::collections::HashMap;
    /// use std::str::FromStr;
    ///
    /// let mut rates = HashMap::new();
    /// rates.insert("Finley Mc".to_string(), Decimal::from_str("18.0").unwrap());
    ///
    /// let table = RateTable {
    ///     default_rate: Decimal::from_str("15.0").unwrap(),
    ///     rates,
    /// };
    /// assert_eq!(table.rate_for("Finley Mc"), Decimal::from_str("18.0").unwrap());
    /// assert_eq!(table.rate_for("Unknown"), Decimal::from_str("15.0").unwrap());
    /// ```
    pub fn rate_for(&self, name: &str) -> Decimal {
        match self.rates.get(name) {
            Some(rate) if !rate.is_zero() => *rate,
            _ => self.default_rate,
        }
    }

    /// Validates the rate table.
    ///
    /// The default rate and every custom rate must be non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.default_rate.is_sign_negative() {
            return Err(EngineError::ConfigInvalid {
                field: "default_rate".to_string(),
                message: format!("must be non-negative, got {}", self.default_rate),
            });
        }
        for (name, rate) in &self.rates {
            if rate.is_sign_negative() {
                return Err(EngineError::ConfigInvalid {
                    field: format!("rates.{}", name),
                    message: format!("must be non-negative, got {}", rate),
                });
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            default_rate: Decimal::new(150, 1),
            rates: HashMap::new(),
        }
    }
}

/// The overtime policy knobs applied by the pay calculator.
///
/// Multipliers are full-replacement factors: Saturday hours are paid at
/// `rate * saturday_multiplier`, not at the base rate plus an uplift.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimePolicy {
    /// Multiplier applied to Saturday hours.
    pub saturday_multiplier: Decimal,
    /// Multiplier applied to Sunday hours.
    pub sunday_multiplier: Decimal,
    /// Weekly hours beyond which the overtime multiplier applies.
    pub weekly_threshold_hours: Decimal,
    /// Multiplier applied to hours beyond the weekly threshold.
    pub overtime_multiplier: Decimal,
}

impl OvertimePolicy {
    /// Validates the policy: multipliers must be positive, the threshold
    /// non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        let multipliers = [
            ("saturday_multiplier", self.saturday_multiplier),
            ("sunday_multiplier", self.sunday_multiplier),
            ("overtime_multiplier", self.overtime_multiplier),
        ];
        for (field, value) in multipliers {
            if value <= Decimal::ZERO {
                return Err(EngineError::ConfigInvalid {
                    field: field.to_string(),
                    message: format!("must be positive, got {}", value),
                });
            }
        }
        if self.weekly_threshold_hours.is_sign_negative() {
            return Err(EngineError::ConfigInvalid {
                field: "weekly_threshold_hours".to_string(),
                message: format!("must be non-negative, got {}", self.weekly_threshold_hours),
            });
        }
        Ok(())
    }
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            saturday_multiplier: Decimal::new(15, 1),
            sunday_multiplier: Decimal::new(175, 2),
            weekly_threshold_hours: Decimal::new(50, 0),
            overtime_multiplier: Decimal::new(15, 1),
        }
    }
}

/// The complete payroll configuration consumed by the engine.
#[derive(Debug, Clone, Default)]
pub struct PayrollConfig {
    /// Rates by employee name, with the default fallback.
    rate_table: RateTable,
    /// The overtime policy.
    policy: OvertimePolicy,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(rate_table: RateTable, policy: OvertimePolicy) -> Self {
        Self { rate_table, policy }
    }

    /// Returns the rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the overtime policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }
}
