//! Document field extraction.
//!
//! This module turns a [`Document`] into an [`EmployeeTimesheet`] by
//! applying a pipeline of independent extraction rules. Each rule returns an
//! optional match and one rule's failure never aborts the others; rules are
//! combined in a documented priority order. Extraction is deliberately
//! best-effort: source timesheets are inconsistently formatted, so missing
//! fields degrade the record instead of failing the document.
//!
//! Malformed day-rows are skipped rather than fatal, and every skip is
//! reported as a [`SkippedRow`] diagnostic so callers can log or display
//! what was dropped.

mod fields;
mod name;
mod shifts;

pub use shifts::{SkipReason, SkippedRow};

use crate::document::Document;
use crate::models::{DateRange, EmployeeTimesheet};

/// The outcome of extracting one document: the best-effort timesheet plus
/// diagnostics for every day-row that was recognized but skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The extracted timesheet.
    pub timesheet: EmployeeTimesheet,
    /// Day-rows that were recognized but could not be turned into records.
    pub skipped: Vec<SkippedRow>,
}

/// Extracts an employee timesheet from a document.
///
/// Pure function of the document content and the source name; performs no
/// I/O. `source_name` is the document's file name (or upload label) and is
/// the final fallback for the employee name, so the returned timesheet's
/// name is never empty.
///
/// Name resolution priority:
/// 1. An all-uppercase multi-word line (title-cased on capture).
/// 2. The text after a "Print Name" label.
/// 3. The stem of `source_name`.
///
/// # Examples
///
/// ```
/// use timesheet_engine::document::Document;
/// use timesheet_engine::extraction::extract;
///
/// let doc = Document {
///     paragraphs: vec!["JOHN SMITH".to_string()],
///     tables: vec![],
/// };
/// let extraction = extract(&doc, "week_31.docx");
/// assert_eq!(extraction.timesheet.name, "John Smith");
/// ```
pub fn extract(document: &Document, source_name: &str) -> Extraction {
    let client = fields::client(document).unwrap_or_default();
    let site = fields::site(document).unwrap_or_default();
    let printed_name = name::printed_name(document);

    let resolved_name = name::uppercase_name(document)
        .or_else(|| printed_name.clone())
        .unwrap_or_else(|| name::source_stem(source_name));

    let rows = shifts::day_rows(document);

    let period = match (rows.dates.iter().min(), rows.dates.iter().max()) {
        (Some(&start), Some(&end)) => Some(DateRange { start, end }),
        _ => None,
    };

    Extraction {
        timesheet: EmployeeTimesheet {
            name: resolved_name,
            client,
            site,
            printed_name: printed_name.unwrap_or_default(),
            period,
            shifts: rows.records,
        },
        skipped: rows.skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Table, TableRow};
    use chrono::Weekday;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn day_row(date: &str, weekday: &str, hours: &str) -> TableRow {
        TableRow {
            cells: vec![
                date.to_string(),
                weekday.to_string(),
                "07:00".to_string(),
                "17:30".to_string(),
                hours.to_string(),
            ],
        }
    }

    fn timesheet_document() -> Document {
        Document {
            paragraphs: vec![
                "PRL STAFFING".to_string(),
                "Client: Acme Construction".to_string(),
                "Site Address: 12 Harbour Way".to_string(),
            ],
            tables: vec![Table {
                rows: vec![
                    TableRow {
                        cells: vec!["JOHN SMITH".to_string()],
                    },
                    TableRow {
                        cells: vec![
                            "Date".to_string(),
                            "Day".to_string(),
                            "Start".to_string(),
                            "Finish".to_string(),
                            "Hours".to_string(),
                        ],
                    },
                    day_row("11.03.2024", "Monday", "8"),
                    day_row("16.03.2024", "Saturday", "10"),
                    day_row("17.03.2024", "Sunday", "-"),
                ],
            }],
        }
    }

    #[test]
    fn test_extracts_all_fields() {
        let extraction = extract(&timesheet_document(), "week_11.docx");
        let sheet = &extraction.timesheet;

        assert_eq!(sheet.name, "John Smith");
        assert_eq!(sheet.client, "Acme Construction");
        assert_eq!(sheet.site, "12 Harbour Way");
        assert_eq!(sheet.shifts.len(), 2);
        assert_eq!(sheet.shifts[0].weekday, Weekday::Mon);
        assert_eq!(sheet.shifts[1].hours, Decimal::from_str("10").unwrap());
    }

    #[test]
    fn test_period_includes_placeholder_hour_rows() {
        let extraction = extract(&timesheet_document(), "week_11.docx");

        // The Sunday row has dash hours and yields no record, but its date
        // still bounds the worked period.
        assert_eq!(
            extraction.timesheet.formatted_period(),
            "11.03.2024 – 17.03.2024"
        );
    }

    #[test]
    fn test_uppercase_name_beats_printed_name() {
        let doc = Document {
            paragraphs: vec![
                "JANE DOE".to_string(),
                "Print Name: John Smith".to_string(),
            ],
            tables: vec![],
        };

        let extraction = extract(&doc, "sheet.docx");
        assert_eq!(extraction.timesheet.name, "Jane Doe");
        assert_eq!(extraction.timesheet.printed_name, "John Smith");
    }

    #[test]
    fn test_printed_name_used_when_no_uppercase_line() {
        let doc = Document {
            paragraphs: vec!["Print Name: John Smith".to_string()],
            tables: vec![],
        };

        let extraction = extract(&doc, "sheet.docx");
        assert_eq!(extraction.timesheet.name, "John Smith");
    }

    #[test]
    fn test_name_falls_back_to_source_stem() {
        let doc = Document::default();

        let extraction = extract(&doc, "aaron_hall_week_31.docx");
        assert_eq!(extraction.timesheet.name, "aaron_hall_week_31");
    }

    #[test]
    fn test_missing_client_and_site_default_to_empty() {
        let doc = Document {
            paragraphs: vec!["JOHN SMITH".to_string()],
            tables: vec![],
        };

        let extraction = extract(&doc, "sheet.docx");
        assert_eq!(extraction.timesheet.client, "");
        assert_eq!(extraction.timesheet.site, "");
        assert_eq!(extraction.timesheet.period, None);
        assert!(extraction.timesheet.shifts.is_empty());
    }

    #[test]
    fn test_skipped_rows_are_reported() {
        let extraction = extract(&timesheet_document(), "week_11.docx");

        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].reason, SkipReason::PlaceholderHours);
    }
}
