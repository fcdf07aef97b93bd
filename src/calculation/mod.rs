//! Pay calculation logic for the timesheet engine.
//!
//! This module partitions a timesheet's shift hours into pay buckets
//! (regular, Saturday, Sunday, over-threshold) and prices them under an
//! [`OvertimePolicy`](crate::config::OvertimePolicy). The calculation is a
//! pure function of its inputs: configuration is passed in explicitly and
//! nothing is cached between calls.

mod buckets;
mod pay;

pub use buckets::{HourBuckets, partition_hours};
pub use pay::compute_pay;
