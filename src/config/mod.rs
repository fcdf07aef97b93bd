//! Configuration loading and management for the timesheet engine.
//!
//! This module provides functionality to load the payroll configuration
//! (rate table and overtime policy) from YAML files. The loaded
//! configuration is passed into the calculator explicitly at call time —
//! the engine keeps no process-wide mutable state.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Default rate: {}", loader.config().rate_table().default_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimePolicy, PayrollConfig, RateTable};
