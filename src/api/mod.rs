//! HTTP API module for the timesheet engine.
//!
//! This module provides the REST endpoints fronting the engine:
//! `/calculate` prices a shift list as JSON, `/extract` runs the full
//! document pipeline on an uploaded `.docx` body.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ShiftRequest};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
