//! Timesheet extraction and pay calculation engine.
//!
//! This crate ingests employee timesheet documents (`.docx`), extracts
//! structured shift records (name, client, site, per-day hours and weekday),
//! computes gross pay under a multi-tier overtime policy, and emits
//! grouping-ready report rows with a per-employee weekly summary.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod models;
pub mod report;
