//! Hour bucket partitioning.
//!
//! The overtime policy is a full-replacement partition: every worked hour
//! lands in exactly one bucket and each bucket is priced by its own
//! multiplier. Weekend hours are never additionally uplifted when the week
//! crosses the overtime threshold; they stay in their weekend buckets.

use rust_decimal::Decimal;

use crate::config::OvertimePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

/// The partition of a timesheet's hours into pay buckets.
///
/// `total` equals the sum of the four buckets except when `regular` was
/// clamped (see [`partition_hours`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBuckets {
    /// The sum of hours across all shifts.
    pub total: Decimal,
    /// Hours paid at the base rate.
    pub regular: Decimal,
    /// Hours worked on Saturdays.
    pub saturday: Decimal,
    /// Hours worked on Sundays.
    pub sunday: Decimal,
    /// Hours beyond the weekly threshold.
    pub over_threshold: Decimal,
}

/// Partitions shift hours into pay buckets.
///
/// 1. Saturday and Sunday hours are summed by the weekday on the record.
/// 2. `over_threshold` is the excess of the total over the policy's weekly
///    threshold.
/// 3. `regular` is what remains, clamped at zero: when the threshold is low
///    enough that weekend hours overlap the over-threshold bucket, those
///    hours stay in their weekend buckets and the regular bucket bottoms
///    out rather than going negative.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] if any record carries negative
/// hours. Negative hours are invalid input and are surfaced, never clamped.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::partition_hours;
/// use timesheet_engine::config::OvertimePolicy;
/// use timesheet_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
///
/// let shifts = vec![
///     ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(), Weekday::Mon, Decimal::from(8)),
///     ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), Weekday::Sat, Decimal::from(10)),
/// ];
/// let buckets = partition_hours(&shifts, &OvertimePolicy::default()).unwrap();
/// assert_eq!(buckets.total, Decimal::from(18));
/// assert_eq!(buckets.regular, Decimal::from(8));
/// assert_eq!(buckets.saturday, Decimal::from(10));
/// ```
pub fn partition_hours(
    shifts: &[ShiftRecord],
    policy: &OvertimePolicy,
) -> EngineResult<HourBuckets> {
    let mut total = Decimal::ZERO;
    let mut saturday = Decimal::ZERO;
    let mut sunday = Decimal::ZERO;

    for shift in shifts {
        if shift.hours.is_sign_negative() {
            return Err(EngineError::Validation {
                message: format!(
                    "negative hours ({}) on {} {}",
                    shift.hours, shift.weekday, shift.date
                ),
            });
        }

        total += shift.hours;
        match shift.weekday {
            chrono::Weekday::Sat => saturday += shift.hours,
            chrono::Weekday::Sun => sunday += shift.hours,
            _ => {}
        }
    }

    let over_threshold = (total - policy.weekly_threshold_hours).max(Decimal::ZERO);
    let regular = (total - saturday - sunday - over_threshold).max(Decimal::ZERO);

    Ok(HourBuckets {
        total,
        regular,
        saturday,
        sunday,
        over_threshold,
    })
}
