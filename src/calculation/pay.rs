//! Gross pay computation.

use rust_decimal::Decimal;

use crate::config::OvertimePolicy;
use crate::error::EngineResult;
use crate::models::{PayResult, ShiftRecord};

use super::partition_hours;

/// Computes gross pay for one timesheet's shift records.
///
/// Hours are partitioned into buckets by [`partition_hours`] and each
/// bucket is priced at its own multiple of the base rate:
///
/// ```text
/// pay = regular * rate
///     + saturday * rate * saturday_multiplier
///     + sunday * rate * sunday_multiplier
///     + over_threshold * rate * overtime_multiplier
/// ```
///
/// All arithmetic is exact decimal math; rounding to 2 decimal places is
/// the report layer's job. The function is pure: the same shifts, rate and
/// policy always produce the same result.
///
/// # Errors
///
/// Returns [`EngineError::Validation`](crate::error::EngineError) if any
/// record carries negative hours.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::compute_pay;
/// use timesheet_engine::config::OvertimePolicy;
/// use timesheet_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shifts = vec![
///     ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), Weekday::Sat, Decimal::from(10)),
/// ];
/// let rate = Decimal::from(15);
/// let result = compute_pay(&shifts, rate, &OvertimePolicy::default()).unwrap();
/// // 10 * 15 * 1.5
/// assert_eq!(result.total_pay, Decimal::from_str("225.0").unwrap());
/// ```
pub fn compute_pay(
    shifts: &[ShiftRecord],
    rate: Decimal,
    policy: &OvertimePolicy,
) -> EngineResult<PayResult> {
    let buckets = partition_hours(shifts, policy)?;

    let total_pay = buckets.regular * rate
        + buckets.saturday * rate * policy.saturday_multiplier
        + buckets.sunday * rate * policy.sunday_multiplier
        + buckets.over_threshold * rate * policy.overtime_multiplier;

    Ok(PayResult {
        total_hours: buckets.total,
        regular_hours: buckets.regular,
        saturday_hours: buckets.saturday,
        sunday_hours: buckets.sunday,
        over_threshold_hours: buckets.over_threshold,
        rate,
        total_pay,
    })
}
