//! HTTP request handlers for the timesheet engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::cost_document;
use crate::calculation::compute_pay;
use crate::document::docx;
use crate::models::ShiftRecord;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/extract", post(extract_handler))
        .with_state(state)
}

/// Handler for the POST /calculate endpoint.
///
/// Accepts a name plus shift list, resolves the rate against the server's
/// rate table and returns the calculated pay result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let shifts: Vec<ShiftRecord> = request.shifts.into_iter().map(Into::into).collect();
    let config = state.config();
    let rate = config.rate_table().rate_for(&request.name);

    match compute_pay(&shifts, rate, config.policy()) {
        Ok(pay) => {
            info!(
                correlation_id = %correlation_id,
                name = %request.name,
                shifts_count = shifts.len(),
                total_pay = %pay.total_pay,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse {
                    name: request.name,
                    pay,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Query parameters for the POST /extract endpoint.
#[derive(Debug, Deserialize)]
struct ExtractParams {
    /// The original file name of the uploaded document; used for error
    /// reporting and as the last-resort employee name.
    source: Option<String>,
}

/// Handler for the POST /extract endpoint.
///
/// Accepts a raw `.docx` body, runs the full extraction and pay pipeline
/// and returns the report row for the document.
async fn extract_handler(
    State(state): State<AppState>,
    Query(params): Query<ExtractParams>,
    body: Bytes,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let source = params.source.unwrap_or_else(|| "upload.docx".to_string());
    info!(
        correlation_id = %correlation_id,
        source = %source,
        bytes = body.len(),
        "Processing extraction request"
    );

    let result = docx::read_bytes(&body, &source)
        .and_then(|document| cost_document(&document, &source, state.config()));

    match result {
        Ok(row) => {
            info!(
                correlation_id = %correlation_id,
                source = %source,
                name = %row.name,
                total_pay = %row.total_pay,
                "Extraction completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(row),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                source = %source,
                error = %err,
                "Extraction failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
