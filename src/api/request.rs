//! Request types for the timesheet engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Request body for the `/calculate` endpoint.
///
/// Carries an employee name (used for rate resolution against the server's
/// rate table) and the shift records to price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee name, matched against the rate table.
    pub name: String,
    /// The shifts worked during the week.
    pub shifts: Vec<ShiftRequest>,
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The date of the shift.
    pub date: NaiveDate,
    /// The weekday of the shift.
    pub weekday: Weekday,
    /// Hours worked.
    pub hours: Decimal,
}

impl From<ShiftRequest> for ShiftRecord {
    fn from(request: ShiftRequest) -> Self {
        ShiftRecord::new(request.date, request.weekday, request.hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "name": "John Smith",
            "shifts": [
                {"date": "2024-03-16", "weekday": "Sat", "hours": "10"}
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "John Smith");
        assert_eq!(request.shifts.len(), 1);
        assert_eq!(request.shifts[0].weekday, Weekday::Sat);
    }

    #[test]
    fn test_shift_request_converts_to_record() {
        let request = ShiftRequest {
            date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            weekday: Weekday::Sat,
            hours: Decimal::from_str("10").unwrap(),
        };

        let record: ShiftRecord = request.into();
        assert_eq!(record.weekday, Weekday::Sat);
        assert_eq!(record.hours, Decimal::from_str("10").unwrap());
    }
}
