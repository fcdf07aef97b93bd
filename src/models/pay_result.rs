//! Pay calculation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a pay calculation for one timesheet.
///
/// Recomputed fresh per timesheet and never mutated after creation. All
/// figures are unrounded; rounding to 2 decimal places happens only at the
/// report boundary.
///
/// The hour buckets partition the total: `total_hours` equals
/// `regular_hours + saturday_hours + sunday_hours + over_threshold_hours`
/// whenever the regular bucket did not have to be clamped at zero (see the
/// calculation module for the clamp).
///
/// # Example
///
/// ```
/// use timesheet_engine::models::PayResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = PayResult {
///     total_hours: Decimal::from_str("32").unwrap(),
///     regular_hours: Decimal::from_str("16").unwrap(),
///     saturday_hours: Decimal::from_str("10").unwrap(),
///     sunday_hours: Decimal::from_str("6").unwrap(),
///     over_threshold_hours: Decimal::ZERO,
///     rate: Decimal::from_str("15").unwrap(),
///     total_pay: Decimal::from_str("622.5").unwrap(),
/// };
/// assert_eq!(
///     result.total_hours,
///     result.regular_hours + result.saturday_hours + result.sunday_hours
///         + result.over_threshold_hours
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// The sum of hours across all shift records.
    pub total_hours: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours worked on Saturdays.
    pub saturday_hours: Decimal,
    /// Hours worked on Sundays.
    pub sunday_hours: Decimal,
    /// Hours beyond the weekly overtime threshold.
    pub over_threshold_hours: Decimal,
    /// The hourly rate the calculation used.
    pub rate: Decimal,
    /// The gross pay across all buckets.
    pub total_pay: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pay_result_serialization_round_trip() {
        let result = PayResult {
            total_hours: dec("32"),
            regular_hours: dec("16"),
            saturday_hours: dec("10"),
            sunday_hours: dec("6"),
            over_threshold_hours: Decimal::ZERO,
            rate: dec("15"),
            total_pay: dec("622.5"),
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: PayResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_decimals_serialize_as_strings() {
        let result = PayResult {
            total_hours: dec("32"),
            regular_hours: dec("16"),
            saturday_hours: dec("10"),
            sunday_hours: dec("6"),
            over_threshold_hours: Decimal::ZERO,
            rate: dec("15"),
            total_pay: dec("622.5"),
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_pay"], serde_json::json!("622.5"));
    }
}
