//! Employee timesheet model.
//!
//! This module defines the EmployeeTimesheet struct produced by the document
//! field extractor, along with the DateRange covering the worked period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftRecord;

/// The worked period covered by a timesheet, inclusive on both ends.
///
/// Displayed in the source documents' own date format:
/// `DD.MM.YYYY – DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The earliest date found on the timesheet.
    pub start: NaiveDate,
    /// The latest date found on the timesheet.
    pub end: NaiveDate,
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} – {}",
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y")
        )
    }
}

/// A single employee's timesheet as extracted from one document.
///
/// `name` is resolved via a fallback chain (uppercase-name line, printed
/// name, source file stem) and is never empty in final output. `client`,
/// `site` and `printed_name` default to the empty string when the document
/// does not carry them; they are optional and not required for pay
/// calculation.
///
/// The `period` spans every day-row whose date parsed, including rows whose
/// hour cell held a placeholder: a dash-hours day still counts toward the
/// worked period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTimesheet {
    /// The resolved employee name.
    pub name: String,
    /// The client named on the timesheet, or empty.
    #[serde(default)]
    pub client: String,
    /// The site address named on the timesheet, or empty.
    #[serde(default)]
    pub site: String,
    /// The name as printed on the signature line, or empty.
    #[serde(default)]
    pub printed_name: String,
    /// The worked period, if any day-row carried a parsable date.
    #[serde(default)]
    pub period: Option<DateRange>,
    /// The recognized per-day shift records, in document order.
    pub shifts: Vec<ShiftRecord>,
}

impl EmployeeTimesheet {
    /// Returns the sum of hours across all shift records.
    pub fn total_hours(&self) -> Decimal {
        self.shifts.iter().map(|s| s.hours).sum()
    }

    /// Returns the worked period formatted for reporting, or an empty
    /// string when no date was found.
    pub fn formatted_period(&self) -> String {
        self.period.map(|p| p.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_date_range_display_uses_dotted_format() {
        let range = DateRange {
            start: make_date("2024-03-11"),
            end: make_date("2024-03-17"),
        };
        assert_eq!(range.to_string(), "11.03.2024 – 17.03.2024");
    }

    #[test]
    fn test_total_hours_sums_all_shifts() {
        let sheet = EmployeeTimesheet {
            name: "John Smith".to_string(),
            client: String::new(),
            site: String::new(),
            printed_name: String::new(),
            period: None,
            shifts: vec![
                ShiftRecord::new(make_date("2024-03-11"), Weekday::Mon, dec("8.0")),
                ShiftRecord::new(make_date("2024-03-12"), Weekday::Tue, dec("7.5")),
            ],
        };
        assert_eq!(sheet.total_hours(), dec("15.5"));
    }

    #[test]
    fn test_total_hours_is_zero_for_empty_timesheet() {
        let sheet = EmployeeTimesheet {
            name: "John Smith".to_string(),
            client: String::new(),
            site: String::new(),
            printed_name: String::new(),
            period: None,
            shifts: vec![],
        };
        assert_eq!(sheet.total_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_formatted_period_empty_when_no_dates() {
        let sheet = EmployeeTimesheet {
            name: "John Smith".to_string(),
            client: String::new(),
            site: String::new(),
            printed_name: String::new(),
            period: None,
            shifts: vec![],
        };
        assert_eq!(sheet.formatted_period(), "");
    }

    #[test]
    fn test_timesheet_serialization_round_trip() {
        let sheet = EmployeeTimesheet {
            name: "John Smith".to_string(),
            client: "Acme Ltd".to_string(),
            site: "12 Harbour Way".to_string(),
            printed_name: "J Smith".to_string(),
            period: Some(DateRange {
                start: make_date("2024-03-11"),
                end: make_date("2024-03-17"),
            }),
            shifts: vec![ShiftRecord::new(
                make_date("2024-03-11"),
                Weekday::Mon,
                dec("8.0"),
            )],
        };

        let json = serde_json::to_string(&sheet).unwrap();
        let deserialized: EmployeeTimesheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, deserialized);
    }
}
