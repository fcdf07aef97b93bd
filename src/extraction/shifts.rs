//! Day-row extraction.
//!
//! Timesheet tables lay each worked day out as a row: date, weekday, start,
//! finish, hours. A row is treated as a day-row when it has at least five
//! cells and its first cell starts with a `DD.MM.YYYY` date. Rows that look
//! like day-rows but cannot be parsed are skipped with a diagnostic rather
//! than failing the document.

use std::sync::LazyLock;

use chrono::{NaiveDate, Weekday};
use regex::Regex;
use rust_decimal::Decimal;

use crate::document::Document;
use crate::models::ShiftRecord;

/// Matches a `DD.MM.YYYY` date at the start of a cell.
static ROW_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})").expect("row-date pattern compiles")
});

/// Tokens an hours cell uses for "did not work".
const PLACEHOLDER_HOURS: [&str; 3] = ["-", "–", "—"];

const DATE_CELL: usize = 0;
const WEEKDAY_CELL: usize = 1;
const HOURS_CELL: usize = 4;
const MIN_DAY_ROW_CELLS: usize = 5;

/// Why a recognized day-row produced no shift record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The date text matched the pattern but is not a real calendar date.
    InvalidDate,
    /// The weekday cell does not name a day of the week.
    UnknownWeekday,
    /// The hours cell holds a placeholder dash.
    PlaceholderHours,
    /// The hours cell is empty.
    EmptyHours,
    /// The hours cell is not a decimal number.
    UnparsableHours,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::InvalidDate => "invalid calendar date",
            SkipReason::UnknownWeekday => "unknown weekday",
            SkipReason::PlaceholderHours => "placeholder hours",
            SkipReason::EmptyHours => "empty hours",
            SkipReason::UnparsableHours => "unparsable hours",
        };
        write!(f, "{}", text)
    }
}

/// A day-row that was recognized but skipped, with its table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based index of the table within the document.
    pub table: usize,
    /// Zero-based index of the row within the table.
    pub row: usize,
    /// Why the row was skipped.
    pub reason: SkipReason,
}

/// The result of scanning a document's tables for day-rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct DayRows {
    /// Successfully parsed shift records, in document order.
    pub records: Vec<ShiftRecord>,
    /// Every valid date seen on a day-row, including skipped rows. A
    /// dash-hours day still bounds the worked period.
    pub dates: Vec<NaiveDate>,
    /// Diagnostics for recognized-but-skipped rows.
    pub skipped: Vec<SkippedRow>,
}

/// Scans every table row and collects shift records plus skip diagnostics.
pub(super) fn day_rows(document: &Document) -> DayRows {
    let mut out = DayRows::default();

    for (table_index, table) in document.tables.iter().enumerate() {
        for (row_index, row) in table.rows.iter().enumerate() {
            if row.cells.len() < MIN_DAY_ROW_CELLS {
                continue;
            }

            let skip = |reason: SkipReason| SkippedRow {
                table: table_index,
                row: row_index,
                reason,
            };

            let date = match parse_row_date(row.cells[DATE_CELL].trim()) {
                RowDate::NotADayRow => continue,
                RowDate::Invalid => {
                    out.skipped.push(skip(SkipReason::InvalidDate));
                    continue;
                }
                RowDate::Valid(date) => date,
            };
            out.dates.push(date);

            let Ok(weekday) = row.cells[WEEKDAY_CELL].trim().parse::<Weekday>() else {
                out.skipped.push(skip(SkipReason::UnknownWeekday));
                continue;
            };

            let hours_text = row.cells[HOURS_CELL].trim();
            if hours_text.is_empty() {
                out.skipped.push(skip(SkipReason::EmptyHours));
                continue;
            }
            if PLACEHOLDER_HOURS.contains(&hours_text) {
                out.skipped.push(skip(SkipReason::PlaceholderHours));
                continue;
            }
            let Ok(hours) = hours_text.parse::<Decimal>() else {
                out.skipped.push(skip(SkipReason::UnparsableHours));
                continue;
            };

            out.records.push(ShiftRecord::new(date, weekday, hours));
        }
    }

    out
}

enum RowDate {
    /// The cell does not start with a date; the row is not a day-row.
    NotADayRow,
    /// The cell matched the date pattern but is not a real calendar date.
    Invalid,
    Valid(NaiveDate),
}

fn parse_row_date(text: &str) -> RowDate {
    let Some(caps) = ROW_DATE.captures(text) else {
        return RowDate::NotADayRow;
    };

    let day = caps[1].parse::<u32>().ok();
    let month = caps[2].parse::<u32>().ok();
    let year = caps[3].parse::<i32>().ok();

    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => NaiveDate::from_ymd_opt(year, month, day)
            .map(RowDate::Valid)
            .unwrap_or(RowDate::Invalid),
        _ => RowDate::Invalid,
    }
}
