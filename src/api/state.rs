//! Application state for the timesheet engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollConfig;

/// Shared application state.
///
/// Contains the loaded payroll configuration, shared across all request
/// handlers.
#[derive(Clone)]
pub struct AppState {
    /// The payroll configuration in effect for this server.
    config: Arc<PayrollConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}
