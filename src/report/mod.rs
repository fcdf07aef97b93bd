//! Report row assembly and the per-employee summary.
//!
//! This is the output boundary of the engine: all rounding to 2 decimal
//! places happens here, and only here. Upstream figures stay exact so that
//! repeated aggregation does not accumulate rounding error.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{EmployeeTimesheet, PayResult, ReportRow, SummaryRow};

/// Builds the report row for one processed document.
///
/// `source` is the document's file name (or upload label); it ties the row
/// back to its input and lets downstream renderers show provenance.
pub fn build_row(timesheet: &EmployeeTimesheet, pay: &PayResult, source: &str) -> ReportRow {
    ReportRow {
        name: timesheet.name.clone(),
        client: timesheet.client.clone(),
        site: timesheet.site.clone(),
        date_range: timesheet.formatted_period(),
        total_hours: pay.total_hours.round_dp(2),
        rate: pay.rate.round_dp(2),
        saturday_hours: pay.saturday_hours.round_dp(2),
        sunday_hours: pay.sunday_hours.round_dp(2),
        over_threshold_hours: pay.over_threshold_hours.round_dp(2),
        total_pay: pay.total_pay.round_dp(2),
        source: source.to_string(),
    }
}

/// Derives the per-employee weekly summary from a set of report rows.
///
/// Rows group by employee name; hours and pay sum within each group. The
/// summary is ordered by name so output is deterministic across runs.
pub fn summarize(rows: &[ReportRow]) -> Vec<SummaryRow> {
    let mut totals: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();

    for row in rows {
        let entry = totals
            .entry(row.name.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += row.total_hours;
        entry.1 += row.total_pay;
    }

    totals
        .into_iter()
        .map(|(name, (total_hours, total_pay))| SummaryRow {
            name: name.to_string(),
            total_hours,
            total_pay,
        })
        .collect()
}
