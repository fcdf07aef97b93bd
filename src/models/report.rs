//! Report row models.
//!
//! One [`ReportRow`] is emitted per processed document; the rendering layer
//! (spreadsheet writer, UI table) consumes these rows as-is. [`SummaryRow`]
//! is the per-employee aggregation derived from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The per-document output row, with all figures rounded to 2 decimal
/// places.
///
/// Rows are grouping-ready: the employee name is always present, so a
/// downstream summarizer can derive `group by name, sum(total_pay)` without
/// touching the source documents again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The resolved employee name.
    pub name: String,
    /// The client named on the timesheet, or empty.
    pub client: String,
    /// The site address named on the timesheet, or empty.
    pub site: String,
    /// The worked period as `DD.MM.YYYY – DD.MM.YYYY`, or empty.
    pub date_range: String,
    /// Total hours worked.
    pub total_hours: Decimal,
    /// The base hourly rate used.
    pub rate: Decimal,
    /// Saturday hours.
    pub saturday_hours: Decimal,
    /// Sunday hours.
    pub sunday_hours: Decimal,
    /// Hours beyond the weekly overtime threshold.
    pub over_threshold_hours: Decimal,
    /// The calculated gross pay.
    pub total_pay: Decimal,
    /// The source document name this row was derived from.
    pub source: String,
}

/// One line of the per-employee weekly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The employee name the rows were grouped by.
    pub name: String,
    /// Total hours across the employee's rows.
    pub total_hours: Decimal,
    /// Total pay across the employee's rows.
    pub total_pay: Decimal,
}
