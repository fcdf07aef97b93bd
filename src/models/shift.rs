//! Shift record model.
//!
//! This module defines the ShiftRecord struct representing one day's
//! worked hours as recorded on a timesheet document.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's worked hours with its weekday and date.
///
/// One record is produced per recognized day-row in a source document.
/// Records are immutable once parsed. The hours figure is carried exactly as
/// parsed; validation (rejecting negative hours) happens at calculation time
/// so that extraction stays best-effort.
///
/// # Examples
///
/// ```
/// use timesheet_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftRecord::new(
///     NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
///     Weekday::Sat,
///     Decimal::new(80, 1), // 8.0
/// );
/// assert!(shift.is_weekend());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The weekday as printed on the timesheet row.
    pub weekday: Weekday,
    /// Hours worked on this day.
    pub hours: Decimal,
}

impl ShiftRecord {
    /// Creates a new shift record.
    pub fn new(date: NaiveDate, weekday: Weekday, hours: Decimal) -> Self {
        Self {
            date,
            weekday,
            hours,
        }
    }

    /// Returns true if this shift falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_weekday_shift_is_not_weekend() {
        let shift = ShiftRecord::new(make_date("2024-03-11"), Weekday::Mon, dec("8.0"));
        assert!(!shift.is_weekend());
    }

    #[test]
    fn test_saturday_shift_is_weekend() {
        let shift = ShiftRecord::new(make_date("2024-03-16"), Weekday::Sat, dec("10.0"));
        assert!(shift.is_weekend());
    }

    #[test]
    fn test_sunday_shift_is_weekend() {
        let shift = ShiftRecord::new(make_date("2024-03-17"), Weekday::Sun, dec("6.0"));
        assert!(shift.is_weekend());
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = ShiftRecord::new(make_date("2024-03-16"), Weekday::Sat, dec("7.5"));

        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "date": "2024-03-16",
            "weekday": "Sat",
            "hours": "7.5"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.date, make_date("2024-03-16"));
        assert_eq!(shift.weekday, Weekday::Sat);
        assert_eq!(shift.hours, dec("7.5"));
    }

    #[test]
    fn test_weekday_deserializes_from_full_name() {
        let json = r#"{
            "date": "2024-03-17",
            "weekday": "sunday",
            "hours": "6"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.weekday, Weekday::Sun);
    }
}
